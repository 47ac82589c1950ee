//! Style-sheet compiler adapters
//!
//! - `GrassCompiler` - the production `StyleCompiler`
//! - `precision` - numeric rounding applied to compiler output
//! - `source_map` - v3 map generation for single-file compiles

mod grass;
pub mod precision;
pub mod source_map;

pub use self::grass::GrassCompiler;
