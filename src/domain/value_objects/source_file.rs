//! Source file naming rules

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extensions recognised as style-sheet sources
pub const SOURCE_EXTENSIONS: [&str; 2] = ["scss", "sass"];

/// Extension of compiled output
pub const CSS_EXTENSION: &str = "css";

/// Suffix appended to an output path to name its source map
pub const MAP_SUFFIX: &str = ".map";

/// True for `*.scss` / `*.sass` (case-sensitive, like the compiler)
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Partials start with `_` and are only compiled when imported
pub fn is_partial(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .map(|name| name.starts_with('_'))
        .unwrap_or(false)
}

/// True if the path, as written, ends in `.css`.
///
/// `out.css/` names a directory: the trailing separator is kept in the check.
pub fn has_css_suffix(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().ends_with(".css")
}

/// Rewrite a source path's extension to `.css`.
///
/// Sources without a `.scss`/`.sass` extension keep their name and get
/// `.css` appended, so output never lands on a file named like its input.
pub fn css_path_for(source: &Path) -> PathBuf {
    if is_source_file(source) {
        source.with_extension(CSS_EXTENSION)
    } else {
        let mut name = source.as_os_str().to_os_string();
        name.push(".");
        name.push(CSS_EXTENSION);
        PathBuf::from(name)
    }
}

/// `<output>.map`
pub fn map_path_for(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(MAP_SUFFIX);
    PathBuf::from(name)
}
