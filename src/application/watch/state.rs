//! Last-seen modification times

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Loop-local record of the newest mtime seen per source file.
///
/// A path that has never been observed counts as older than any real
/// timestamp, so the first poll always reports every file.
#[derive(Debug, Default)]
pub struct WatchState {
    seen: HashMap<PathBuf, SystemTime>,
}

impl WatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mtime` for `path`. Returns true when it is strictly newer
    /// than what was recorded before.
    pub fn observe(&mut self, path: &Path, mtime: SystemTime) -> bool {
        match self.seen.get_mut(path) {
            Some(last) if mtime <= *last => false,
            Some(last) => {
                *last = mtime;
                true
            }
            None => {
                self.seen.insert(path.to_path_buf(), mtime);
                true
            }
        }
    }

    /// Forget every path not in `present`. Returns how many were dropped.
    pub fn retain_only(&mut self, present: &HashSet<PathBuf>) -> usize {
        let before = self.seen.len();
        self.seen.retain(|path, _| present.contains(path));
        before - self.seen.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[cfg(test)]
    pub fn last_seen(&self, path: &Path) -> Option<SystemTime> {
        self.seen.get(path).copied()
    }
}
