//! Directory walking shared by the compiler and the asset locator

use std::path::Path;

use ignore::{Walk, WalkBuilder};

/// Walk `root` recursively in file-name order.
///
/// Hidden files and directories are skipped; `.gitignore` and friends are
/// not consulted, so generated or vendored sources are still found.
pub fn source_walker(root: &Path) -> Walk {
    WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
}
