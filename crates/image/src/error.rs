//! Error types for the image crate.

use thiserror::Error;

/// Result type alias for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;

/// Errors that can occur while scanning, decoding or exporting images.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Invalid image data or an unusable source path
    #[error("Invalid image data: {0}")]
    InvalidData(String),

    /// libwebp rejected the encode
    #[error("WebP encode error: {0}")]
    WebpEncode(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Decode, resize or PNG encode error
    #[error("Image processing error: {0}")]
    ProcessingError(#[from] image::ImageError),
}
