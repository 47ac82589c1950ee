use sasskit::SasskitError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_sasskit_error(err: &SasskitError, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err {
        SasskitError::SourceNotFound { path } => ErrorBlock::new("Source not found", err.to_string())
            .with_fix(format!(
                "Check that '{}' is a .scss/.sass file or a directory.",
                path.display()
            )),
        SasskitError::InvalidOutput { .. } => ErrorBlock::new("Invalid output", err.to_string())
            .with_fix("Pass a directory (or a path without a .css suffix) as OUT."),
        SasskitError::Compile { message } => ErrorBlock::new("Compile error", message.as_str()),
        SasskitError::Write { path, message } => {
            ErrorBlock::new("Write failed", message.as_str()).with_file(path)
        }
        SasskitError::InvalidConfig { file, message } => {
            ErrorBlock::new("Invalid config", message.as_str()).with_file(file)
        }
        SasskitError::Io(_) => ErrorBlock::new("IO error", err.to_string()),
    };
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(sasskit) = err.downcast_ref::<SasskitError>() {
        return format_sasskit_error(sasskit, supports_color, supports_unicode);
    }

    ErrorBlock::new("Error", format!("{:#}", err)).render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let kind = err
            .downcast_ref::<SasskitError>()
            .map(SasskitError::kind)
            .unwrap_or("other");
        let output = serde_json::json!({
            "event": "error",
            "kind": kind,
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color && !caps.is_ci, caps.supports_unicode)
    );
}
