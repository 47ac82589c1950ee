//! AssetLocator port - where style-sheet sources live
//!
//! The locator answers two questions: which directories act as include roots,
//! and which source files currently exist under them. The watch loop asks the
//! second question once per poll.

use std::path::PathBuf;

/// Source of include roots and candidate source files
pub trait AssetLocator {
    /// Ordered absolute directories searched by the compiler
    fn roots(&self) -> Vec<PathBuf>;

    /// Absolute paths of every file under the roots whose extension is in
    /// `extensions`. Order is stable within one call.
    fn source_files(&self, extensions: &[&str]) -> Vec<PathBuf>;
}
