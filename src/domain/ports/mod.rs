//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_locator;
pub mod file_system;
pub mod style_compiler;

pub use asset_locator::AssetLocator;
pub use file_system::{FileSystem, FsError, FsResult};
pub use style_compiler::StyleCompiler;
