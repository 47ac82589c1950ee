//! grass-backed StyleCompiler

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{CompilePlan, CompileResult, CompiledFile, PlanMode};
use crate::domain::ports::StyleCompiler;
use crate::domain::value_objects::source_file::{css_path_for, is_partial, is_source_file};
use crate::domain::value_objects::{CompileOptions, OutputStyle};
use crate::error::{SasskitError, SasskitResult};
use crate::infrastructure::walk::source_walker;

use super::precision::apply_precision;
use super::source_map::{build_source_map, source_mapping_comment};

/// Compiles Sass/SCSS with the pure-Rust `grass` compiler
#[derive(Debug, Clone, Copy, Default)]
pub struct GrassCompiler;

impl GrassCompiler {
    pub fn new() -> Self {
        Self
    }

    fn compile_file(&self, path: &Path, options: &CompileOptions) -> SasskitResult<String> {
        let grass_options = grass::Options::default()
            .style(grass_style(options.style))
            .load_paths(options.include_roots.as_slice());

        let css = grass::from_path(path, &grass_options).map_err(|e| SasskitError::Compile {
            message: e.to_string(),
        })?;

        Ok(apply_precision(&css, options.precision))
    }

    fn compile_single(
        &self,
        source: &Path,
        output: &Path,
        source_map: Option<&Path>,
        options: &CompileOptions,
    ) -> SasskitResult<CompileResult> {
        let mut css = self.compile_file(source, options)?;

        let map = match source_map {
            Some(map_path) => {
                // grass reads sources straight from disk; the map embeds the same bytes.
                let content = std::fs::read_to_string(source)?;
                css.push_str(&source_mapping_comment(map_path));
                Some(build_source_map(source, &content, output, map_path))
            }
            None => None,
        };

        Ok(CompileResult::Single { css, map })
    }

    fn compile_batch(&self, root: &Path, options: &CompileOptions) -> SasskitResult<CompileResult> {
        let mut files = Vec::new();
        for relative in batch_sources(root)? {
            debug!(source = %relative.display(), "compiling");
            let css = self.compile_file(&root.join(&relative), options)?;
            files.push(CompiledFile::new(css_path_for(&relative), css));
        }
        Ok(CompileResult::Batch(files))
    }
}

impl StyleCompiler for GrassCompiler {
    fn compile(&self, plan: &CompilePlan, options: &CompileOptions) -> SasskitResult<CompileResult> {
        match plan.mode() {
            PlanMode::SingleFile { output, source_map } => {
                self.compile_single(plan.source(), output, source_map.as_deref(), options)
            }
            PlanMode::DirectoryBatch { .. } => self.compile_batch(plan.source(), options),
        }
    }
}

/// grass renders only expanded and compressed output.
fn grass_style(style: OutputStyle) -> grass::OutputStyle {
    match style {
        OutputStyle::Compressed => grass::OutputStyle::Compressed,
        OutputStyle::Expanded | OutputStyle::Nested | OutputStyle::Compact => {
            grass::OutputStyle::Expanded
        }
    }
}

/// Non-partial sources under `root`, relative to it, in walk order.
fn batch_sources(root: &Path) -> SasskitResult<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in source_walker(root) {
        let entry = entry.map_err(|e| SasskitError::Io(std::io::Error::other(e.to_string())))?;
        let path = entry.path();
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file || !is_source_file(path) || is_partial(path) {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(root) {
            sources.push(relative.to_path_buf());
        }
    }
    Ok(sources)
}
