//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_INTERVAL;
use crate::domain::value_objects::{OutputStyle, DEFAULT_PRECISION};
use crate::error::SasskitResult;

use super::loader::{self, ConfigWarning};

/// `[compile]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileConfig {
    #[serde(default)]
    pub style: OutputStyle,

    #[serde(default = "default_precision")]
    pub precision: u32,

    #[serde(default)]
    pub source_map: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            style: OutputStyle::default(),
            precision: DEFAULT_PRECISION,
            source_map: false,
        }
    }
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

/// `[assets]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Static roots; relative entries are resolved against the project root
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Also use every `<project>/<app>/static` directory
    #[serde(default = "default_true")]
    pub app_static: bool,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            app_static: true,
        }
    }
}

/// `[watch]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: f64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl WatchConfig {
    /// Poll interval; negative or non-finite values fall back to the default.
    pub fn interval(&self) -> Duration {
        interval_from_secs(self.interval_secs).unwrap_or(DEFAULT_INTERVAL)
    }
}

fn default_interval_secs() -> f64 {
    DEFAULT_INTERVAL.as_secs_f64()
}

/// Parse a user-supplied poll interval in seconds.
///
/// `None` for negative, non-finite or out-of-range values.
pub fn interval_from_secs(secs: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(secs).ok()
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub compile: CompileConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SasskitResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SasskitResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config, else user config, else defaults; env overrides on top.
    pub fn load_layered(project_root: &Path) -> SasskitResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root)
    }

    /// Apply environment variable overrides (SASSKIT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Configured static roots made absolute against `project_root`.
    pub fn asset_roots(&self, project_root: &Path) -> Vec<PathBuf> {
        self.assets
            .roots
            .iter()
            .map(|root| {
                if root.is_absolute() {
                    root.clone()
                } else {
                    project_root.join(root)
                }
            })
            .collect()
    }
}
