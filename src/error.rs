//! Error types for Sasskit
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Sasskit operations
pub type SasskitResult<T> = Result<T, SasskitError>;

/// Main error type for Sasskit operations
#[derive(Error, Debug)]
pub enum SasskitError {
    /// Input path is neither a regular file nor a directory
    #[error("source path not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Directory input paired with a non-directory output
    #[error("output path '{path}' must also be a directory when input path is a directory")]
    InvalidOutput { path: PathBuf },

    /// The style-sheet compiler rejected the source
    #[error("compile error: {message}")]
    Compile { message: String },

    /// Writing a compiled artifact failed
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Malformed configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SasskitError {
    /// Compile errors are the only kind the watch loop recovers from.
    pub fn is_compile_error(&self) -> bool {
        matches!(self, SasskitError::Compile { .. })
    }

    /// Stable snake_case name used in NDJSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            SasskitError::SourceNotFound { .. } => "source_not_found",
            SasskitError::InvalidOutput { .. } => "invalid_output",
            SasskitError::Compile { .. } => "compile",
            SasskitError::Write { .. } | SasskitError::Io(_) => "io",
            SasskitError::InvalidConfig { .. } => "invalid_config",
        }
    }

    /// Path the error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SasskitError::SourceNotFound { path }
            | SasskitError::InvalidOutput { path }
            | SasskitError::Write { path, .. } => Some(path),
            SasskitError::InvalidConfig { file, .. } => Some(file),
            SasskitError::Compile { .. } | SasskitError::Io(_) => None,
        }
    }
}
