//! Compile plan resolution
//!
//! Turns a source path, a destination path and the source-map flag into a
//! `CompilePlan`. This is the only place that decides whether a destination
//! is a file or a directory, and the only place (besides the writer) that
//! creates directories.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::CompilePlan;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::source_file::{css_path_for, has_css_suffix, map_path_for};
use crate::domain::value_objects::{infer_dest_role, DestRole};
use crate::error::{SasskitError, SasskitResult};

/// Resolves compile plans against a file system
pub struct PlanResolver<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> PlanResolver<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Resolve `(source, dest, want_source_map)` into a plan.
    ///
    /// May create `dest` (and parents) as a directory. Never touches the
    /// file system when `source` does not exist.
    pub fn resolve(
        &self,
        source: &Path,
        dest: &Path,
        want_source_map: bool,
    ) -> SasskitResult<CompilePlan> {
        if self.fs.is_dir(source) {
            self.resolve_directory(source, dest, want_source_map)
        } else if self.fs.is_file(source) {
            self.resolve_file(source, dest, want_source_map)
        } else {
            Err(SasskitError::SourceNotFound {
                path: source.to_path_buf(),
            })
        }
    }

    fn resolve_directory(
        &self,
        source: &Path,
        dest: &Path,
        want_source_map: bool,
    ) -> SasskitResult<CompilePlan> {
        if !self.fs.exists(dest) {
            debug!(dest = %dest.display(), "creating output directory");
            self.fs.create_dir_all(dest)?;
        }

        if !self.fs.is_dir(dest) {
            return Err(SasskitError::InvalidOutput {
                path: dest.to_path_buf(),
            });
        }

        if want_source_map {
            debug!("source maps are not written for directory input");
        }

        Ok(CompilePlan::directory_batch(source, dest))
    }

    fn resolve_file(
        &self,
        source: &Path,
        dest: &Path,
        want_source_map: bool,
    ) -> SasskitResult<CompilePlan> {
        let role = infer_dest_role(
            self.fs.exists(dest),
            self.fs.is_dir(dest),
            has_css_suffix(dest),
        );

        if role == DestRole::CreateDir {
            debug!(dest = %dest.display(), "destination has no .css suffix, creating directory");
            self.fs.create_dir_all(dest)?;
        }

        let output = if role.is_directory() {
            let name = source.file_name().ok_or_else(|| SasskitError::SourceNotFound {
                path: source.to_path_buf(),
            })?;
            dest.join(css_path_for(Path::new(name)))
        } else {
            dest.to_path_buf()
        };

        let source_map = want_source_map.then(|| map_path_for(&output));
        debug!(output = %output.display(), ?role, "resolved single-file plan");

        Ok(CompilePlan::single_file(source, output, source_map))
    }
}
