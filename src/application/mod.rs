//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileUseCase` - resolve plan, compile, write outputs
//! - `WatchUseCase` - poll sources and recompile on change
//!
//! ## Services
//!
//! - `OutputWriter` - parent-creating, atomic writes of compiled text

pub mod compile;
pub mod watch;
mod writer;

pub use compile::{CompileReport, CompileRequest, CompileUseCase};
pub use watch::{WatchEvent, WatchOptions, WatchState, WatchUseCase, DEFAULT_INTERVAL};
pub use writer::OutputWriter;
