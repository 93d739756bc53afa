use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors emitted by the generator and parser stages.
#[derive(Debug, Error)]
pub enum SurgeError {
    #[error("image file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = SurgeError> = std::result::Result<T, E>;
