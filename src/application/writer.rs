//! Output writer
//!
//! Every compiled artifact, single-file CSS, source map or batch member,
//! goes through `OutputWriter::write`.

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::error::{SasskitError, SasskitResult};

/// Writes compiled text to disk through a `FileSystem`
pub struct OutputWriter<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> OutputWriter<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Create the parent directories of `path`, then replace its contents
    /// with `text`.
    pub fn write(&self, path: &Path, text: &str) -> SasskitResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs
                .create_dir_all(parent)
                .map_err(|e| write_error(path, e))?;
        }
        self.fs.write(path, text).map_err(|e| write_error(path, e))
    }
}

fn write_error(path: &Path, err: impl std::fmt::Display) -> SasskitError {
    SasskitError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
