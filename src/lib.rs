//! Sasskit - Sass/SCSS build orchestrator
//!
//! Compiles a single style sheet or a whole directory tree with `grass`,
//! discovers static asset roots to use as include paths, and can keep
//! recompiling while sources change.
//!
//! ## Layers
//!
//! - `domain` - plans, options, destination rules and the ports
//! - `application` - compile and watch use cases
//! - `infrastructure` - local file system, grass compiler, static-dir locator
//! - `config` - layered TOML + environment configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{
    CompileReport, CompileRequest, CompileUseCase, WatchEvent, WatchOptions, WatchState,
    WatchUseCase,
};
pub use config::Config;
pub use domain::entities::{CompilePlan, CompileResult, CompiledFile, PlanMode};
pub use domain::value_objects::{infer_dest_role, CompileOptions, DestRole, OutputStyle};
pub use error::{SasskitError, SasskitResult};
pub use infrastructure::{GrassCompiler, LocalFs, StaticDirsLocator};
