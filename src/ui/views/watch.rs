use std::path::Path;
use std::time::Duration;

use sasskit::WatchEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_watch_header(
    source: &Path,
    output: &Path,
    interval: Duration,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Sasskit Watch");
    header.add("Source", source.display().to_string());
    header.add("Output", output.display().to_string());
    header.add("Interval", format!("{}s", interval.as_secs_f64()));
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);

    match event {
        WatchEvent::WatchStarted { roots, .. } => {
            let mut out = format!(
                "{} {} Watching...\n",
                prefix,
                Icon::Watch.colored(supports_color, supports_unicode)
            );
            for root in roots {
                out.push_str(&format!(
                    "  {} {}\n",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    root
                ));
            }
            out
        }
        WatchEvent::FilesChanged { paths } => match paths.as_slice() {
            [one] => format!(
                "{} {} Changed: {}\n",
                prefix,
                Icon::Arrow.colored(supports_color, supports_unicode),
                one
            ),
            many => format!(
                "{} {} Changed: {} files\n",
                prefix,
                Icon::Arrow.colored(supports_color, supports_unicode),
                many.len()
            ),
        },
        WatchEvent::CompileStarted => format!(
            "{} {} Compiling...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        WatchEvent::CompileComplete { written, .. } => format!(
            "{} {} Updated files at {} ({} written)\n",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
            timestamp,
            written.len()
        ),
        WatchEvent::CompileFailed { message } => {
            let mut out = format!(
                "{} {} {}\n",
                prefix,
                Icon::Error.colored(supports_color, supports_unicode),
                ColoredText::error("Compile error").render(supports_color)
            );
            for line in message.lines() {
                out.push_str(&format!("  {}\n", line));
            }
            out
        }
        WatchEvent::Error { message, .. } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Bye.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(event: &WatchEvent) -> String {
        render_watch_event("12:00:00", event, false, false)
    }

    #[test]
    fn header_shows_interval_and_hint() {
        let rendered = render_watch_header(
            Path::new("scss"),
            Path::new("css"),
            Duration::from_millis(500),
            false,
            false,
        );

        insta::assert_snapshot!(rendered.trim_end(), @r"
[~] Sasskit Watch
Source: scss
Output: css
Interval: 0.5s
Hint: Press Ctrl+C to stop
");
    }

    #[test]
    fn renders_started_event_with_roots() {
        let event = WatchEvent::WatchStarted {
            source: "scss".to_string(),
            output: "css".to_string(),
            roots: vec!["/srv/app/static".to_string()],
            interval_secs: 3.0,
        };

        insta::assert_snapshot!(render(&event).trim_end(), @r"
[12:00:00] [~] Watching...
  [>] /srv/app/static
");
    }

    #[test]
    fn renders_single_and_multiple_changes() {
        let one = WatchEvent::FilesChanged {
            paths: vec!["scss/site.scss".to_string()],
        };
        let many = WatchEvent::FilesChanged {
            paths: vec!["a.scss".to_string(), "b.scss".to_string()],
        };

        assert_eq!(render(&one), "[12:00:00] [>] Changed: scss/site.scss\n");
        assert_eq!(render(&many), "[12:00:00] [>] Changed: 2 files\n");
    }

    #[test]
    fn renders_update_and_shutdown() {
        let done = WatchEvent::CompileComplete {
            mode: "single_file".to_string(),
            written: vec!["css/site.css".to_string()],
        };

        assert_eq!(
            render(&done),
            "[12:00:00] [OK] Updated files at 12:00:00 (1 written)\n"
        );
        assert_eq!(render(&WatchEvent::Shutdown), "\n[12:00:00] [~] Bye.\n");
    }

    #[test]
    fn renders_compile_failure_indented() {
        let failed = WatchEvent::CompileFailed {
            message: "Error: expected \"}\".\n  site.scss 3:1".to_string(),
        };

        insta::assert_snapshot!(render(&failed).trim_end(), @r#"
[12:00:00] [FAIL] Compile error
  Error: expected "}".
    site.scss 3:1
"#);
    }
}
