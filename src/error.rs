use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Directory contains no entries: {0}")]
    EmptyDirectory(PathBuf),

    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Not a JPEG file: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("Cannot derive an output location from: {0}")]
    InvalidPath(PathBuf),

    #[error("Interaction failed: {0}")]
    Interaction(String),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
