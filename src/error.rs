//! Error types for image to ASCII conversion.

use std::path::PathBuf;

/// Errors that can occur while loading, converting, or writing an image.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A caller-supplied value is out of range or malformed.
    #[error("{0}")]
    InvalidArgument(String),

    /// The image is smaller than a single block in at least one dimension.
    #[error(
        "Image {width}x{height} is smaller than one {block_w}x{block_h} block; nothing to convert"
    )]
    EmptyResult {
        width: usize,
        height: usize,
        block_w: usize,
        block_h: usize,
    },

    /// The requested image path does not exist.
    #[error("No image file '{}' exists.", path.display())]
    FileNotFound { path: PathBuf },

    /// The image file could not be decoded.
    #[error("Failed to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Reading or writing a stream failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ConvertError::InvalidArgument(msg.into())
    }
}
