//! Configuration module for Sasskit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SASSKIT_*)
//! 3. Project config (./sasskit.toml)
//! 4. User config (<config dir>/sasskit/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    interval_from_secs, AssetsConfig, ColorMode, CompileConfig, Config, OutputConfig, WatchConfig,
};
