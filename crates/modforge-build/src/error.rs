/// Build tool error types
use std::path::PathBuf;
use thiserror::Error;

pub type BuildResult<T> = Result<T, BuildToolError>;

/// Errors raised by the build and test runners
///
/// Only launch- and I/O-level problems are errors; a failing build or a
/// crashing test run is data, carried in the outcome records.
#[derive(Debug, Error)]
pub enum BuildToolError {
    #[error("Failed to start process '{command}': {error}")]
    Launch {
        command: String,
        error: std::io::Error,
    },

    #[error("I/O error at {path}: {error}")]
    IoError {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildToolError {
    /// Create a launch error for a command that failed to spawn
    pub fn launch(command: impl Into<String>, error: std::io::Error) -> Self {
        Self::Launch {
            command: command.into(),
            error,
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            error,
        }
    }
}
