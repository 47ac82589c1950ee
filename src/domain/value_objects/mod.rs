//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compile_options;
mod dest_role;
mod output_style;
pub mod source_file;

pub use compile_options::{CompileOptions, DEFAULT_PRECISION};
pub use dest_role::{infer_dest_role, DestRole};
pub use output_style::OutputStyle;
