//! Property tests for numeric precision rounding.

use proptest::prelude::*;

use sasskit::infrastructure::compiler::precision::apply_precision;

/// `a { margin: 1.25px 0.3333px ...; }` with random literals
fn declaration() -> impl Strategy<Value = String> {
    let literal = (0u32..10_000, proptest::string::string_regex("[0-9]{0,12}").unwrap())
        .prop_map(|(int, frac)| {
            if frac.is_empty() {
                format!("{}px", int)
            } else {
                format!("{}.{}px", int, frac)
            }
        });
    proptest::collection::vec(literal, 1..6)
        .prop_map(|values| format!("a {{ margin: {}; }}", values.join(" ")))
}

fn max_fraction_digits(css: &str) -> usize {
    css.split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter_map(|token| token.split_once('.'))
        .map(|(_, frac)| frac.len())
        .max()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rounding never panics, whatever the input bytes.
    #[test]
    fn property_precision_never_panics(css in "(?s).{0,256}", precision in 0u32..12) {
        let _ = apply_precision(&css, precision);
    }

    /// PROPERTY: No literal keeps more fractional digits than requested.
    #[test]
    fn property_fractions_fit_precision(css in declaration(), precision in 0u32..10) {
        let rounded = apply_precision(&css, precision);
        prop_assert!(max_fraction_digits(&rounded) <= precision as usize, "{}", rounded);
    }

    /// PROPERTY: Rounding twice changes nothing.
    #[test]
    fn property_rounding_is_stable(css in declaration(), precision in 0u32..10) {
        let once = apply_precision(&css, precision);
        prop_assert_eq!(apply_precision(&once, precision), once);
    }

    /// PROPERTY: Text that is not a number survives untouched.
    #[test]
    fn property_non_numeric_text_is_kept(css in declaration(), precision in 0u32..10) {
        let rounded = apply_precision(&css, precision);
        prop_assert!(rounded.starts_with("a { margin: "), "{}", rounded);
        prop_assert!(rounded.ends_with("px; }"), "{}", rounded);
    }
}
