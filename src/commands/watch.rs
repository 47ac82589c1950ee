use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use sasskit::{GrassCompiler, LocalFs, WatchEvent, WatchOptions, WatchUseCase};

use super::{Invocation, Reported};
use crate::ui::context::UiContext;

pub fn cmd_watch(invocation: Invocation, ui: &UiContext) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            crate::ui::views::watch::render_watch_header(
                &invocation.request.source,
                &invocation.request.dest,
                invocation.interval,
                ui.color,
                ui.unicode
            )
        );
    }

    let fs = LocalFs::new();
    let compiler = GrassCompiler::new();
    let options = WatchOptions::new(invocation.request).with_interval(invocation.interval);
    let use_case = WatchUseCase::new(&invocation.locator, &fs, &compiler, options);

    use_case
        .start(running, |event| {
            if ui.json {
                let _ = crate::ui::json::emit_event(&event);
                return;
            }

            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            let rendered =
                crate::ui::views::watch::render_watch_event(&timestamp, &event, ui.color, ui.unicode);

            match event {
                WatchEvent::Error { .. } | WatchEvent::CompileFailed { .. } => eprint!("{rendered}"),
                _ => {
                    print!("{rendered}");
                    let _ = std::io::Write::flush(&mut std::io::stdout());
                }
            }
        })
        .map_err(Reported)?;

    Ok(())
}
