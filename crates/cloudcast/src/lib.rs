#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use cloudcast_image as image;

#[doc(inline)]
pub use cloudcast_imgproc as imgproc;

#[doc(inline)]
pub use cloudcast_io as io;

#[doc(inline)]
pub use cloudcast_3d as c3d;
