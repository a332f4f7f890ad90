/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the length of the pixel data does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds for an image with {1} channels")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the image sizes of an operation do not match.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a crop window does not fit inside the source image.
    #[error("Crop window at ({x}, {y}) with size {width}x{height} does not fit the source image")]
    InvalidCropWindow {
        /// Column of the window's top-left corner.
        x: usize,
        /// Row of the window's top-left corner.
        y: usize,
        /// Width of the window in pixels.
        width: usize,
        /// Height of the window in pixels.
        height: usize,
    },

    /// Error when a sampling factor is not a positive integer.
    #[error("Scale factor must be a positive integer, got {0}")]
    InvalidScaleFactor(usize),

    /// Error when a contrast strength is not a finite positive value.
    #[error("Contrast strength must be a finite positive value, got {0}")]
    InvalidContrastStrength(f64),

    /// Error when an input value lies outside the domain of the logarithmic
    /// contrast curve.
    #[error("Input value {0} is outside the domain of the logarithmic contrast curve")]
    LogContrastDomain(f64),

    /// Error when the pixel data cannot be cast to the target type.
    #[error("Failed to cast the pixel data to the target type")]
    CastError,
}
