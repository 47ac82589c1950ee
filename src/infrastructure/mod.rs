//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file system
//! - `compiler/` - grass-backed style compiler
//! - `locator/` - static-directory asset discovery

pub mod compiler;
pub mod fs;
pub mod locator;
pub(crate) mod walk;

pub use compiler::GrassCompiler;
pub use fs::LocalFs;
pub use locator::StaticDirsLocator;
