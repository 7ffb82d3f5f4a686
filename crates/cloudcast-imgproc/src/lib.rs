#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Color space conversions.
pub mod color;

/// Parallel execution helpers.
pub mod parallel;
