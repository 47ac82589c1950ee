//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::OutputStyle;
use crate::error::{SasskitError, SasskitResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{interval_from_secs, Config};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "sasskit.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SasskitResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SasskitError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: closest(&key, KNOWN_KEYS).map(str::to_string),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config, then user config, then defaults. The first file found is
/// used; environment overrides are applied to the result.
pub fn load_layered(project_root: &Path) -> SasskitResult<(Config, Vec<ConfigWarning>)> {
    let candidates = [
        Some(project_root.join(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];

    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            debug!(config = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `<config dir>/sasskit/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sasskit").join("config.toml"))
}

/// Apply environment variable overrides (SASSKIT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

pub(crate) fn apply_env<V, W>(mut config: Config, var: V, warnings: &mut W) -> Config
where
    V: Fn(&str) -> Option<String>,
    W: Write,
{
    // SASSKIT_STYLE
    if let Some(style) = var("SASSKIT_STYLE") {
        let names: Vec<&str> = OutputStyle::ALL.iter().map(|s| s.as_str()).collect();
        config.compile.style = EnvVarValidator::new("SASSKIT_STYLE", &names).parse_with_writer(
            &style,
            |s| s.parse().ok(),
            config.compile.style,
            warnings,
        );
    }

    // SASSKIT_PRECISION
    if let Some(precision) = var("SASSKIT_PRECISION") {
        config.compile.precision = EnvVarValidator::new("SASSKIT_PRECISION", &[])
            .parse_with_writer(
                &precision,
                |s| s.trim().parse().ok(),
                config.compile.precision,
                warnings,
            );
    }

    // SASSKIT_SOURCE_MAP
    if let Some(val) = var("SASSKIT_SOURCE_MAP") {
        config.compile.source_map = val.to_lowercase() != "false" && val != "0";
    }

    // SASSKIT_WATCH_INTERVAL (seconds)
    if let Some(interval) = var("SASSKIT_WATCH_INTERVAL") {
        config.watch.interval_secs = EnvVarValidator::new("SASSKIT_WATCH_INTERVAL", &[])
            .parse_with_writer(
                &interval,
                |s| {
                    let secs: f64 = s.trim().parse().ok()?;
                    interval_from_secs(secs).map(|_| secs)
                },
                config.watch.interval_secs,
                warnings,
            );
    }

    // SASSKIT_INCLUDE (platform path list)
    if let Some(include) = var("SASSKIT_INCLUDE") {
        config
            .assets
            .roots
            .extend(std::env::split_paths(&include).filter(|p| !p.as_os_str().is_empty()));
    }

    config
}

const KNOWN_KEYS: &[&str] = &[
    "compile",
    "style",
    "precision",
    "source_map",
    "assets",
    "roots",
    "app_static",
    "watch",
    "interval_secs",
    "output",
    "color",
    "unicode",
];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
