//! Watch Use Case
//!
//! Re-runs one compile whenever a source file under the locator's roots
//! changes. Change detection is mtime polling:
//! - each cycle lists source files and compares their mtimes to `WatchState`
//! - a dirty cycle re-runs the fixed `CompileRequest`
//! - compile errors are reported and the loop keeps going
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(request).with_interval(Duration::from_secs(3));
//! let use_case = WatchUseCase::new(&locator, &fs, &compiler, options);
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod state;
mod use_case;


pub use event::{WatchEvent, WatchOptions, DEFAULT_INTERVAL};
pub use state::WatchState;
pub use use_case::WatchUseCase;
