//! Destination role inference
//!
//! A destination path handed to a single-file compile may name an output file
//! or a directory. When the path does not exist yet, the only hint is whether
//! its name ends in `.css`.

/// What a destination path turns out to mean for a single-file compile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestRole {
    /// Existing directory: output goes inside it, named after the source
    ExistingDir,
    /// Missing path without a `.css` suffix: create it, output goes inside
    CreateDir,
    /// Literal output file path (existing non-directory, or missing `*.css`)
    File,
}

impl DestRole {
    /// Whether the output file is derived from the source name
    pub fn is_directory(&self) -> bool {
        matches!(self, DestRole::ExistingDir | DestRole::CreateDir)
    }
}

/// Infer the destination role from what is on disk and the name suffix.
pub fn infer_dest_role(exists: bool, is_dir: bool, has_css_suffix: bool) -> DestRole {
    match (exists, is_dir, has_css_suffix) {
        (true, true, _) => DestRole::ExistingDir,
        (true, false, _) => DestRole::File,
        (false, _, true) => DestRole::File,
        (false, _, false) => DestRole::CreateDir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_combination_is_covered() {
        let cases = [
            ((true, true, true), DestRole::ExistingDir),
            ((true, true, false), DestRole::ExistingDir),
            ((true, false, true), DestRole::File),
            ((true, false, false), DestRole::File),
            ((false, false, true), DestRole::File),
            ((false, false, false), DestRole::CreateDir),
            // is_dir is meaningless for a missing path
            ((false, true, true), DestRole::File),
            ((false, true, false), DestRole::CreateDir),
        ];

        for ((exists, is_dir, css), expected) in cases {
            assert_eq!(
                infer_dest_role(exists, is_dir, css),
                expected,
                "exists={exists} is_dir={is_dir} css={css}"
            );
        }
    }

    #[test]
    fn directory_roles() {
        assert!(DestRole::ExistingDir.is_directory());
        assert!(DestRole::CreateDir.is_directory());
        assert!(!DestRole::File.is_directory());
    }
}
