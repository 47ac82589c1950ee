//! Source map generation
//!
//! grass does not emit source maps, so the adapter writes a version 3 map
//! that links the output to its source file and embeds the source text.
//! The `mappings` field is left empty: browsers show the original file, not
//! per-rule positions.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SourceMapV3<'a> {
    version: u8,
    file: String,
    sources: Vec<String>,
    sources_content: Vec<&'a str>,
    names: Vec<String>,
    mappings: &'a str,
}

/// Render the map JSON for `source` compiled into `output`, stored at `map`.
pub fn build_source_map(source: &Path, source_content: &str, output: &Path, map: &Path) -> String {
    let map_dir = absolutize(map.parent().unwrap_or_else(|| Path::new("")));
    let source_url = relative_url(&map_dir, &absolutize(source));
    let file = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let map = SourceMapV3 {
        version: 3,
        file,
        sources: vec![source_url],
        sources_content: vec![source_content],
        names: Vec::new(),
        mappings: "",
    };

    serde_json::to_string_pretty(&map).unwrap_or_else(|_| "{}".to_string())
}

/// Trailing comment pointing the browser at the map file.
pub fn source_mapping_comment(map: &Path) -> String {
    let name = map
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("\n/*# sourceMappingURL={} */\n", name)
}

fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Relative URL (forward slashes) from directory `from` to file `to`.
fn relative_url(from: &Path, to: &Path) -> String {
    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat("..".to_string()).take(from.len() - common);
    let downs = to[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());

    ups.chain(downs).collect::<Vec<_>>().join("/")
}
