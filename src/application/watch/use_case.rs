//! Watch Use Case implementation

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::application::compile::CompileUseCase;
use crate::domain::ports::{AssetLocator, FileSystem, StyleCompiler};
use crate::domain::value_objects::source_file::SOURCE_EXTENSIONS;
use crate::error::SasskitResult;

use super::event::{WatchEvent, WatchOptions};
use super::state::WatchState;

/// Longest uninterrupted sleep; bounds how long cancellation can go unnoticed
const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// Watch Use Case
///
/// Polls source modification times and re-runs the same compile whenever
/// anything changed.
pub struct WatchUseCase<'a, L, F, C>
where
    L: AssetLocator + ?Sized,
    F: FileSystem + ?Sized,
    C: StyleCompiler + ?Sized,
{
    locator: &'a L,
    fs: &'a F,
    compile: CompileUseCase<'a, F, C>,
    options: WatchOptions,
}

impl<'a, L, F, C> WatchUseCase<'a, L, F, C>
where
    L: AssetLocator + ?Sized,
    F: FileSystem + ?Sized,
    C: StyleCompiler + ?Sized,
{
    pub fn new(locator: &'a L, fs: &'a F, compiler: &'a C, options: WatchOptions) -> Self {
        Self {
            locator,
            fs,
            compile: CompileUseCase::new(fs, compiler),
            options,
        }
    }

    /// Start watching (blocking)
    ///
    /// Returns `Ok(())` once `running` is cleared. A non-compile error ends
    /// the loop early and is returned after an `Error` event.
    pub fn start<E>(&self, running: Arc<AtomicBool>, on_event: E) -> SasskitResult<()>
    where
        E: Fn(WatchEvent),
    {
        on_event(WatchEvent::WatchStarted {
            source: self.options.request.source.display().to_string(),
            output: self.options.request.dest.display().to_string(),
            roots: display_all(&self.locator.roots()),
            interval_secs: self.options.interval.as_secs_f64(),
        });

        let mut state = WatchState::new();
        while running.load(Ordering::SeqCst) {
            self.cycle(&mut state, &on_event)?;
            self.sleep(&running);
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// One poll: detect changes and recompile if any were found.
    ///
    /// Returns whether a compile was attempted.
    pub fn cycle(&self, state: &mut WatchState, on_event: &impl Fn(WatchEvent)) -> SasskitResult<bool> {
        let changed = self.poll(state);
        if changed.is_empty() {
            return Ok(false);
        }

        on_event(WatchEvent::FilesChanged {
            paths: display_all(&changed),
        });
        on_event(WatchEvent::CompileStarted);

        match self.compile.run_once(&self.options.request) {
            Ok(report) => on_event(WatchEvent::CompileComplete {
                mode: report.mode.to_string(),
                written: display_all(&report.written),
            }),
            Err(e) if e.is_compile_error() => {
                warn!(error = %e, "compile failed, still watching");
                on_event(WatchEvent::CompileFailed {
                    message: e.to_string(),
                });
            }
            Err(e) => {
                on_event(WatchEvent::Error {
                    kind: e.kind().to_string(),
                    message: e.to_string(),
                });
                return Err(e);
            }
        }

        Ok(true)
    }

    /// Compare current mtimes against `state`; return the paths that moved
    /// forward (or appeared).
    fn poll(&self, state: &mut WatchState) -> Vec<PathBuf> {
        let mut present = HashSet::new();
        let mut changed = Vec::new();

        for path in self.locator.source_files(&SOURCE_EXTENSIONS) {
            let path = path.canonicalize().unwrap_or(path);
            let mtime = match self.fs.modified(&path) {
                Ok(mtime) => mtime,
                Err(e) => {
                    // Deleted between listing and stat.
                    debug!(path = %path.display(), error = %e, "skipping unreadable source");
                    continue;
                }
            };
            if state.observe(&path, mtime) {
                changed.push(path.clone());
            }
            present.insert(path);
        }

        let dropped = state.retain_only(&present);
        if dropped > 0 {
            debug!(dropped, "forgot removed sources");
        }

        changed
    }

    /// Sleep one interval in slices. An interval past what `Instant` can
    /// represent sleeps until cancelled.
    fn sleep(&self, running: &AtomicBool) {
        let deadline = Instant::now().checked_add(self.options.interval);
        while running.load(Ordering::SeqCst) {
            let slice = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    SLEEP_SLICE.min(deadline - now)
                }
                None => SLEEP_SLICE,
            };
            std::thread::sleep(slice);
        }
    }
}

fn display_all(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}
