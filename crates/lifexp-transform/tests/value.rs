//! Property tests for cell value extraction.

use proptest::prelude::*;

use lifexp_transform::extract_value;

proptest! {
    #[test]
    fn extraction_never_panics(raw in ".*") {
        if let Some(value) = extract_value(&raw) {
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.0);
        }
    }

    #[test]
    fn flag_suffix_is_ignored(
        whole in 0u32..130,
        tenths in 0u32..10,
        flag in "[a-z]{0,3}",
    ) {
        let number = format!("{whole}.{tenths}");
        let raw = format!("{number} {flag}");
        prop_assert_eq!(extract_value(&raw), number.parse::<f64>().ok());
    }

    #[test]
    fn padded_colon_is_missing(left in " {0,3}", right in " {0,3}") {
        let raw = format!("{left}:{right}");
        prop_assert_eq!(extract_value(&raw), None);
    }

    #[test]
    fn letters_only_is_missing(raw in "[a-zA-Z :]*") {
        prop_assert_eq!(extract_value(&raw), None);
    }
}
