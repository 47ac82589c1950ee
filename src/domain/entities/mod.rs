//! Domain Entities
//!
//! - `CompilePlan` - a resolved compilation unit (mode + output paths)
//! - `CompileResult` / `CompiledFile` - what the compiler produced

mod compile_plan;
mod compile_result;

pub use compile_plan::{CompilePlan, PlanMode};
pub use compile_result::{CompileResult, CompiledFile};
