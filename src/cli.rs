//! CLI Argument Parsing
//!
//! `sasskit [OPTIONS] <IN> <OUT>`: one compile, or a watch loop with
//! `--watch`. Flags left unset fall back to environment and config files.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use sasskit::config::{interval_from_secs, ColorMode};
use sasskit::OutputStyle;

/// Sasskit - compile Sass/SCSS files and directories, optionally on every change
#[derive(Parser, Debug)]
#[command(name = "sasskit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input .scss/.sass file or directory
    #[arg(value_name = "IN")]
    pub input: PathBuf,

    /// Output .css file or directory
    #[arg(value_name = "OUT")]
    pub output: PathBuf,

    /// Output style
    #[arg(short = 't', long, value_enum)]
    pub style: Option<OutputStyle>,

    /// Decimal places kept in numbers [default: 8]
    #[arg(short = 'p', long)]
    pub precision: Option<u32>,

    /// Write <output>.map next to the CSS (file input only)
    #[arg(short = 'g', long = "source-map")]
    pub source_map: bool,

    /// Keep polling for changes and recompile
    #[arg(long)]
    pub watch: bool,

    /// Extra include/static root (repeatable)
    #[arg(short = 'I', long = "include", value_name = "DIR")]
    pub include: Vec<PathBuf>,

    /// Poll interval in seconds for --watch [default: 3]
    #[arg(long, value_name = "SECS", value_parser = parse_interval)]
    pub interval: Option<Duration>,

    /// Project root for config and <app>/static discovery [default: .]
    #[arg(long, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Emit NDJSON events instead of human output
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_interval(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", value))?;
    interval_from_secs(secs)
        .ok_or_else(|| format!("'{}' must be a non-negative, finite number of seconds", value))
}
