//! Command handlers for the `sasskit` binary

mod compile;
mod watch;

use std::path::{Path, PathBuf};
use std::time::Duration;

use sasskit::config::Config;
use sasskit::domain::ports::AssetLocator;
use sasskit::{CompileOptions, CompileRequest, SasskitError, StaticDirsLocator};

use crate::cli::Cli;

pub use compile::cmd_compile;
pub use watch::cmd_watch;

/// An error that has already been shown to the user
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Reported(pub SasskitError);

/// Everything a compile or watch run needs, after CLI > env > config merging
#[derive(Debug)]
pub struct Invocation {
    pub request: CompileRequest,
    pub locator: StaticDirsLocator,
    pub interval: Duration,
}

impl Invocation {
    pub fn from_cli(cli: &Cli, config: &Config, project: &Path) -> Self {
        let mut locator = StaticDirsLocator::new(
            config
                .asset_roots(project)
                .into_iter()
                .chain(cli.include.iter().cloned()),
        );
        if config.assets.app_static {
            locator = locator.with_app_static(project);
        }
        let locator = locator.with_fallback(&cli.input);

        let options = CompileOptions::default()
            .with_style(cli.style.unwrap_or(config.compile.style))
            .with_precision(cli.precision.unwrap_or(config.compile.precision))
            .with_source_map(cli.source_map || config.compile.source_map)
            .with_include_roots(locator.roots());

        Self {
            request: CompileRequest::new(&cli.input, &cli.output, options),
            locator,
            interval: cli.interval.unwrap_or_else(|| config.watch.interval()),
        }
    }
}

/// `--project`, or the current directory
pub fn project_root(cli: &Cli) -> PathBuf {
    cli.project
        .clone()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
