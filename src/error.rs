//! Error types for asset generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, AssetError>;

/// Errors that stop a generation run
///
/// Font loading and icon reuse never produce these; they fall back instead.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Creating an output directory or reading a settings file failed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing a PNG failed
    #[error("Failed to write image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Settings file could not be parsed
    #[error("Invalid settings in {path}: {message}")]
    Config { path: PathBuf, message: String },
}
