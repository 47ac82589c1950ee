//! Watch event types and options

use std::time::Duration;

use crate::application::compile::CompileRequest;

/// Default poll interval
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// The fixed compile request re-run on every dirty cycle
    pub request: CompileRequest,
    /// Sleep between polls
    pub interval: Duration,
}

impl WatchOptions {
    pub fn new(request: CompileRequest) -> Self {
        Self {
            request,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Progress events, serialized as NDJSON in `--json` mode
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        source: String,
        output: String,
        roots: Vec<String>,
        interval_secs: f64,
    },
    FilesChanged {
        paths: Vec<String>,
    },
    CompileStarted,
    CompileComplete {
        mode: String,
        written: Vec<String>,
    },
    CompileFailed {
        message: String,
    },
    Error {
        kind: String,
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
