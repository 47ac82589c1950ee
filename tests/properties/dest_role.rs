//! Property tests for destination role inference.

use std::path::PathBuf;

use proptest::prelude::*;

use sasskit::domain::value_objects::source_file::has_css_suffix;
use sasskit::{infer_dest_role, DestRole};

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}(\\.(css|scss|map|txt))?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An existing path's role comes from the disk, never its name.
    #[test]
    fn property_existing_paths_ignore_suffix(is_dir in any::<bool>(), css in any::<bool>()) {
        let role = infer_dest_role(true, is_dir, css);
        prop_assert_eq!(role.is_directory(), is_dir);
        prop_assert_ne!(role, DestRole::CreateDir);
    }

    /// PROPERTY: A missing path is a file exactly when its name ends in `.css`.
    #[test]
    fn property_missing_paths_follow_suffix(dir in file_name(), name in file_name()) {
        let dest = PathBuf::from(dir).join(&name);
        let role = infer_dest_role(false, false, has_css_suffix(&dest));

        if name.ends_with(".css") {
            prop_assert_eq!(role, DestRole::File);
        } else {
            prop_assert_eq!(role, DestRole::CreateDir);
        }
    }
}
