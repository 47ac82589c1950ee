//! CompilePlan entity - one resolved compilation unit
//!
//! Plans are built fresh for every compile and never persisted. Once a
//! single-file plan exists its output path is fixed.

use std::path::{Path, PathBuf};

/// How the source is compiled and where output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanMode {
    /// One source file to one output file
    SingleFile {
        output: PathBuf,
        /// `<output>.map` when a source map was requested
        source_map: Option<PathBuf>,
    },
    /// A source tree to a mirrored output tree
    DirectoryBatch { output_dir: PathBuf },
}

/// A resolved, unambiguous compilation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilePlan {
    source: PathBuf,
    mode: PlanMode,
}

impl CompilePlan {
    pub fn single_file(
        source: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        source_map: Option<PathBuf>,
    ) -> Self {
        Self {
            source: source.into(),
            mode: PlanMode::SingleFile {
                output: output.into(),
                source_map,
            },
        }
    }

    pub fn directory_batch(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            mode: PlanMode::DirectoryBatch {
                output_dir: output_dir.into(),
            },
        }
    }

    /// Source file or directory
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn mode(&self) -> &PlanMode {
        &self.mode
    }

    pub fn is_batch(&self) -> bool {
        matches!(self.mode, PlanMode::DirectoryBatch { .. })
    }

    /// Output file for single-file plans
    pub fn output_file(&self) -> Option<&Path> {
        match &self.mode {
            PlanMode::SingleFile { output, .. } => Some(output),
            PlanMode::DirectoryBatch { .. } => None,
        }
    }

    /// Source map path for single-file plans that asked for one
    pub fn source_map_file(&self) -> Option<&Path> {
        match &self.mode {
            PlanMode::SingleFile { source_map, .. } => source_map.as_deref(),
            PlanMode::DirectoryBatch { .. } => None,
        }
    }

    /// Stable name used in reports and events
    pub fn mode_name(&self) -> &'static str {
        match self.mode {
            PlanMode::SingleFile { .. } => "single_file",
            PlanMode::DirectoryBatch { .. } => "directory_batch",
        }
    }
}
