use std::path::Path;

use sasskit::CompileReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_compile_header(
    source: &Path,
    output: &Path,
    style: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Compile, "Sasskit Compile");
    header.add("Source", source.display().to_string());
    header.add("Output", output.display().to_string());
    header.add("Style", style);
    header.render(supports_color, supports_unicode)
}

pub fn render_compile_report(
    report: &CompileReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let count = report.css_files().count();
    let noun = if count == 1 { "file" } else { "files" };
    let mut out = format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(format!("Compiled {} {}", count, noun)).render(supports_color)
    );

    if verbose > 0 || report.written.len() <= 10 {
        for path in &report.written {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                path.display()
            ));
        }
    }
    out
}
