/// Export error types
use std::path::PathBuf;
use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Template directory not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("Insertion slot '{slot}' not found in {path}")]
    MissingSlot { slot: String, path: PathBuf },

    #[error("I/O error at {path}: {error}")]
    IoError {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            error,
        }
    }

    /// Create a missing slot error
    pub fn missing_slot(slot: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::MissingSlot {
            slot: slot.into(),
            path: path.into(),
        }
    }
}
