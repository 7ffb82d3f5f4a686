#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Pinhole camera intrinsic parameters.
pub mod camera;

/// I/O utilities for reading calibration data and writing dataset records.
pub mod io;

/// Dense point cloud type.
pub mod pointcloud;

/// Pinhole back-projection of depth maps.
pub mod projection;

/// RGB-D frame type.
pub mod rgbd;
