/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the source and destination image sizes do not match.
    #[error("Source image ({0}x{1}) does not match destination image ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel value cannot be represented in the target type.
    #[error("Failed to cast pixel value to {0}")]
    CastError(String),

    /// Error when accessing a pixel outside the image bounds.
    #[error("Pixel index (x: {0}, y: {1}, ch: {2}) is out of bounds")]
    PixelIndexOutOfBounds(usize, usize, usize),
}
