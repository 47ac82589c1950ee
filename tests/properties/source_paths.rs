//! Property tests for output and map path naming.

use std::path::PathBuf;

use proptest::prelude::*;

use sasskit::domain::value_objects::source_file::{css_path_for, is_source_file, map_path_for};

fn relative_path() -> impl Strategy<Value = PathBuf> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,10}").unwrap();
    let ext = prop_oneof![
        Just(".scss"),
        Just(".sass"),
        Just(".css"),
        Just(".txt"),
        Just(""),
    ];
    (proptest::collection::vec(segment, 1..=4), ext).prop_map(|(segments, ext)| {
        let mut path: PathBuf = segments.iter().collect();
        let name = format!("{}{}", segments.last().map(String::as_str).unwrap_or("x"), ext);
        path.set_file_name(name);
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Compiled output always carries a `.css` extension and
    /// stays in the source's directory.
    #[test]
    fn property_css_path_is_css(source in relative_path()) {
        let css = css_path_for(&source);
        prop_assert_eq!(css.extension().and_then(|e| e.to_str()), Some("css"));
        prop_assert_eq!(css.parent(), source.parent());
    }

    /// PROPERTY: Only non-sources keep their full name in the output.
    #[test]
    fn property_non_sources_are_not_overwritten(source in relative_path()) {
        let css = css_path_for(&source);
        prop_assert_ne!(&css, &source);
        if is_source_file(&source) {
            prop_assert_eq!(css.file_stem(), source.file_stem());
        } else {
            let expected = format!("{}.css", source.display());
            prop_assert_eq!(css.display().to_string(), expected);
        }
    }

    /// PROPERTY: The map sits next to its output, named `<output>.map`.
    #[test]
    fn property_map_path_appends_suffix(output in relative_path()) {
        let map = map_path_for(&output);
        prop_assert_eq!(map.parent(), output.parent());
        prop_assert_eq!(map.display().to_string(), format!("{}.map", output.display()));
    }
}
