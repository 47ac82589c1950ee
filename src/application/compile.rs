//! Compile orchestration: resolve a plan, compile it, write the outputs

use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::entities::{CompileResult, PlanMode};
use crate::domain::ports::{FileSystem, StyleCompiler};
use crate::domain::services::PlanResolver;
use crate::domain::value_objects::CompileOptions;
use crate::error::{SasskitError, SasskitResult};

use super::writer::OutputWriter;

/// One compile invocation: input, output and options
#[derive(Debug, Clone)]
pub struct CompileRequest {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub options: CompileOptions,
}

impl CompileRequest {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>, options: CompileOptions) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            options,
        }
    }
}

/// What a compile run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    /// `single_file` or `directory_batch`
    pub mode: &'static str,
    /// Every path written, in write order
    pub written: Vec<PathBuf>,
}

impl CompileReport {
    pub fn css_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.written
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == "css"))
    }
}

/// Runs a single compile end to end. Holds no state between runs.
pub struct CompileUseCase<'a, F, C>
where
    F: FileSystem + ?Sized,
    C: StyleCompiler + ?Sized,
{
    fs: &'a F,
    compiler: &'a C,
}

impl<'a, F, C> CompileUseCase<'a, F, C>
where
    F: FileSystem + ?Sized,
    C: StyleCompiler + ?Sized,
{
    pub fn new(fs: &'a F, compiler: &'a C) -> Self {
        Self { fs, compiler }
    }

    pub fn run_once(&self, request: &CompileRequest) -> SasskitResult<CompileReport> {
        let plan = PlanResolver::new(self.fs).resolve(
            &request.source,
            &request.dest,
            request.options.source_map,
        )?;
        debug!(mode = plan.mode_name(), source = %plan.source().display(), "resolved plan");

        let result = self.compiler.compile(&plan, &request.options)?;

        let writer = OutputWriter::new(self.fs);
        let mut written = Vec::with_capacity(result.css_count() + 1);

        match (plan.mode(), result) {
            (PlanMode::SingleFile { output, source_map }, CompileResult::Single { css, map }) => {
                // Map first, so the CSS never references a map that is not there.
                if let (Some(map_path), Some(map)) = (source_map, map) {
                    writer.write(map_path, &map)?;
                    written.push(map_path.clone());
                }
                writer.write(output, &css)?;
                written.push(output.clone());
            }
            (PlanMode::DirectoryBatch { output_dir }, CompileResult::Batch(files)) => {
                for file in files {
                    let path = output_dir.join(file.path());
                    writer.write(&path, file.css())?;
                    written.push(path);
                }
            }
            _ => {
                return Err(SasskitError::Compile {
                    message: "compiler result does not match the compile plan".to_string(),
                })
            }
        }

        info!(mode = plan.mode_name(), files = written.len(), "compiled");
        Ok(CompileReport {
            mode: plan.mode_name(),
            written,
        })
    }
}
