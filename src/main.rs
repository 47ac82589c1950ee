//! Sasskit CLI
//!
//! Usage: sasskit [OPTIONS] <IN> <OUT>

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use sasskit::config::Config;

use crate::cli::Cli;
use crate::commands::{project_root, Invocation, Reported};
use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        if err.downcast_ref::<Reported>().is_none() {
            crate::ui::error::print_error(&err, json);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project = project_root(&cli);
    let (config, warnings) = Config::load_layered(&project)?;

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    sasskit::logging::init(cli.verbose, ui.caps.supports_color);

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let invocation = Invocation::from_cli(&cli, &config, &project);
    tracing::debug!(
        source = %invocation.request.source.display(),
        dest = %invocation.request.dest.display(),
        roots = invocation.request.options.include_roots.len(),
        "starting"
    );

    if cli.watch {
        commands::cmd_watch(invocation, &ui)
    } else {
        commands::cmd_compile(&invocation, &ui)
    }
}
