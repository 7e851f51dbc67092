//! Error type for a grayscale job.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::grayscale::EngineError;

/// Errors that can occur while running a job end to end.
#[derive(Debug, thiserror::Error)]
pub enum GrayscaleError {
    #[error("Invalid input path '{0}': expected a .jpg or .jpeg file")]
    InvalidPath(String),

    #[error("Failed to read image '{}': {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{engine} output differs from the sequential baseline at ({x}, {y})")]
    Mismatch { engine: String, x: u32, y: u32 },
}
