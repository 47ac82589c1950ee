//! Static-directory asset locator
//!
//! Roots come from three places, in order: configured/explicit directories,
//! then every `<project>/<app>/static` directory. When none of them exist the
//! locator falls back to the directory holding the compile input.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::ports::AssetLocator;
use crate::infrastructure::walk::source_walker;

/// Locates style-sheet sources under an ordered list of static roots
#[derive(Debug, Clone, Default)]
pub struct StaticDirsLocator {
    roots: Vec<PathBuf>,
}

impl StaticDirsLocator {
    /// Build from explicit roots. Missing directories are dropped with a
    /// warning; duplicates keep their first position.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut locator = Self::default();
        for root in roots {
            locator.push_root(root.as_ref());
        }
        locator
    }

    /// Append every `<project>/*/static` directory in name order.
    pub fn with_app_static(mut self, project: &Path) -> Self {
        for dir in app_static_dirs(project) {
            self.push_root(&dir);
        }
        self
    }

    /// Use the input's directory when no root survived.
    ///
    /// A directory input is its own root; a file input contributes its parent.
    pub fn with_fallback(mut self, input: &Path) -> Self {
        if !self.roots.is_empty() {
            return self;
        }
        let dir = if input.is_dir() {
            Some(input)
        } else {
            input.parent().map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
        };
        if let Some(dir) = dir {
            debug!(root = %dir.display(), "no static roots found, falling back to input directory");
            self.push_root(dir);
        }
        self
    }

    fn push_root(&mut self, root: &Path) {
        let canonical = match root.canonicalize() {
            Ok(path) if path.is_dir() => path,
            Ok(_) => {
                warn!(root = %root.display(), "static root is not a directory, skipping");
                return;
            }
            Err(_) => {
                warn!(root = %root.display(), "static root does not exist, skipping");
                return;
            }
        };
        if self.roots.contains(&canonical) {
            return;
        }
        debug!(root = %canonical.display(), "static root");
        self.roots.push(canonical);
    }
}

impl AssetLocator for StaticDirsLocator {
    fn roots(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }

    fn source_files(&self, extensions: &[&str]) -> Vec<PathBuf> {
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut files = Vec::new();

        for root in &self.roots {
            for entry in source_walker(root).flatten() {
                let path = entry.path();
                if !entry.file_type().is_some_and(|t| t.is_file()) {
                    continue;
                }
                let matches = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| extensions.contains(&e));
                if !matches {
                    continue;
                }
                // Earlier roots shadow later ones for the same relative path.
                let Ok(relative) = path.strip_prefix(root) else {
                    continue;
                };
                if seen.insert(relative.to_path_buf()) {
                    files.push(path.to_path_buf());
                }
            }
        }

        files
    }
}

fn app_static_dirs(project: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(project) else {
        warn!(project = %project.display(), "project directory is not readable");
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path().join("static"))
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "a { b: c; }").unwrap();
    }

    #[test]
    fn discovers_app_static_dirs_in_name_order() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("app2/static")).unwrap();
        fs::create_dir_all(dir.path().join("app1/static")).unwrap();
        fs::create_dir_all(dir.path().join("templates")).unwrap();

        let locator = StaticDirsLocator::default().with_app_static(dir.path());

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(
            locator.roots(),
            vec![root.join("app1/static"), root.join("app2/static")]
        );
    }

    #[test]
    fn missing_and_duplicate_roots_are_dropped() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();

        let locator = StaticDirsLocator::new([
            dir.path().join("assets"),
            dir.path().join("nope"),
            dir.path().join("assets/../assets"),
        ]);

        assert_eq!(locator.roots().len(), 1);
    }

    #[test]
    fn source_files_filters_by_extension() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("static/app/scss/test.scss"));
        touch(&dir.path().join("static/app/scss/_partial.scss"));
        touch(&dir.path().join("static/app/css/test.css"));

        let locator = StaticDirsLocator::new([dir.path().join("static")]);
        let files = locator.source_files(&["scss", "sass"]);

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["_partial.scss", "test.scss"]);
    }

    #[test]
    fn first_root_wins_for_same_relative_path() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a/static/shared/site.scss"));
        touch(&dir.path().join("b/static/shared/site.scss"));
        touch(&dir.path().join("b/static/shared/extra.scss"));

        let locator =
            StaticDirsLocator::new([dir.path().join("a/static"), dir.path().join("b/static")]);
        let files = locator.source_files(&["scss"]);

        let a = dir.path().join("a/static").canonicalize().unwrap();
        let b = dir.path().join("b/static").canonicalize().unwrap();
        assert_eq!(files, vec![a.join("shared/site.scss"), b.join("shared/extra.scss")]);
    }

    #[test]
    fn falls_back_to_input_parent() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scss/site.scss");
        touch(&input);

        let locator = StaticDirsLocator::new(Vec::<PathBuf>::new()).with_fallback(&input);

        assert_eq!(
            locator.roots(),
            vec![dir.path().join("scss").canonicalize().unwrap()]
        );
    }

    #[test]
    fn fallback_is_ignored_when_roots_exist() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("static")).unwrap();
        touch(&dir.path().join("elsewhere/site.scss"));

        let locator = StaticDirsLocator::new([dir.path().join("static")])
            .with_fallback(&dir.path().join("elsewhere/site.scss"));

        assert_eq!(
            locator.roots(),
            vec![dir.path().join("static").canonicalize().unwrap()]
        );
    }
}
