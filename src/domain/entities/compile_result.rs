//! Compiler output entities

use std::path::{Path, PathBuf};

/// One compiled file from a batch compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFile {
    /// Output path relative to the batch output directory
    path: PathBuf,
    /// Compiled CSS
    css: String,
}

impl CompiledFile {
    pub fn new(path: impl Into<PathBuf>, css: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            css: css.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

/// What the compiler hands back for a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileResult {
    /// Single-file compile: CSS plus the map text if one was requested
    Single { css: String, map: Option<String> },
    /// Directory compile: one entry per non-partial source
    Batch(Vec<CompiledFile>),
}

impl CompileResult {
    /// Number of CSS files this result will produce
    pub fn css_count(&self) -> usize {
        match self {
            CompileResult::Single { .. } => 1,
            CompileResult::Batch(files) => files.len(),
        }
    }
}
