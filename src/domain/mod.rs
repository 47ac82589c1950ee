//! Domain Layer
//!
//! The compile-plan rules and the types they work on.
//!
//! ## Structure
//!
//! - `entities/` - `CompilePlan`, `CompileResult`
//! - `value_objects/` - `OutputStyle`, `CompileOptions`, `DestRole`, source naming
//! - `services/` - `PlanResolver`
//! - `ports/` - `FileSystem`, `StyleCompiler`, `AssetLocator`
//!
//! ## Design Principles
//!
//! 1. **Ports & Adapters** - All I/O goes through trait-defined ports
//! 2. **Pure Functions** - Role inference and naming rules are plain functions

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
