#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Buffer conversion utilities for 16-bit image data.
pub mod conv_utils;

/// Error types for I/O operations.
pub mod error;

/// PNG image encoding and decoding.
///
/// Read and write PNG images with support for 8-bit color and 16-bit depth
/// buffers.
pub mod png;

pub use crate::conv_utils::{convert_buf_u16_u8, convert_buf_u8_u16};
pub use crate::error::IoError;
