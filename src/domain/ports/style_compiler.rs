//! StyleCompiler port - the external style-sheet compiler
//!
//! Modelled as a pure function: plan + options in, compiled text out. Every
//! failure the compiler reports about the source surfaces as
//! `SasskitError::Compile`.

use crate::domain::entities::{CompilePlan, CompileResult};
use crate::domain::value_objects::CompileOptions;
use crate::error::SasskitResult;

/// Compiles the sources named by a plan
pub trait StyleCompiler {
    /// Returns `CompileResult::Single` for single-file plans and
    /// `CompileResult::Batch` for directory plans. Never writes to disk.
    fn compile(&self, plan: &CompilePlan, options: &CompileOptions) -> SasskitResult<CompileResult>;
}
