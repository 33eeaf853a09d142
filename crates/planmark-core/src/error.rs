//! Error types for the planmark library.
//!
//! The pure parser functions never fail; malformed plans simply yield no
//! steps. Errors come from the file-backed store and from validating ids that
//! arrive as text.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for store and input-validation failures.
#[derive(Error, Debug)]
pub enum PlanError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Extension trait attaching the offending path to I/O errors.
pub trait FsResultExt<T> {
    /// Map an I/O error to [`PlanError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| PlanError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for planmark operations
pub type Result<T> = std::result::Result<T, PlanError>;
