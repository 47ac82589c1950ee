//! Diagnostic logging setup
//!
//! Library code logs through `tracing`; the binary installs a subscriber
//! that writes to stderr so stdout stays clean for CSS-adjacent output and
//! NDJSON events.
//!
//! - `SASSKIT_LOG` (or `RUST_LOG`) sets the filter, e.g. `sasskit=debug`
//! - otherwise `-v` picks the level: warn, info, debug, trace
//! - `SASSKIT_LOG_FORMAT=json` switches to one JSON object per line

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(std::env::var("SASSKIT_LOG_FORMAT").ok().as_deref())
    }
}

/// Default filter directive for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    match std::env::var("SASSKIT_LOG").or_else(|_| std::env::var("RUST_LOG")) {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::new(level_for_verbosity(verbose)),
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: u8, ansi: bool) {
    let filter = build_filter(verbose);

    let result = match LogFormat::from_env() {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(ansi)
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
