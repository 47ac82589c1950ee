use anyhow::Result;
use sasskit::{CompileUseCase, GrassCompiler, LocalFs, WatchEvent};

use super::Invocation;
use crate::ui::context::UiContext;

pub fn cmd_compile(invocation: &Invocation, ui: &UiContext) -> Result<()> {
    let request = &invocation.request;

    if !ui.json {
        print!(
            "{}",
            crate::ui::views::compile::render_compile_header(
                &request.source,
                &request.dest,
                request.options.style.as_str(),
                ui.color,
                ui.unicode
            )
        );
    }

    let fs = LocalFs::new();
    let compiler = GrassCompiler::new();
    let report = CompileUseCase::new(&fs, &compiler).run_once(request)?;

    if ui.json {
        crate::ui::json::emit_event(&WatchEvent::CompileComplete {
            mode: report.mode.to_string(),
            written: report
                .written
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        })?;
    } else {
        print!(
            "{}",
            crate::ui::views::compile::render_compile_report(&report, ui.verbose, ui.color, ui.unicode)
        );
    }

    Ok(())
}
