//! Numeric extraction from raw Eurostat cells.
//!
//! Cells look like `80.1`, `80.1 e` (value plus a flag letter), `: ` (not
//! available) or `: c` (confidential). Only the leading number is kept.

use std::sync::LazyLock;

use regex::Regex;

/// ASCII digits with an optional fractional part.
static NUMERIC_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?").expect("Invalid numeric regex"));

/// Eurostat's "not available" marker.
const MISSING_MARKER: &str = ":";

/// Extracts the numeric value of a raw cell, or `None` when it carries none.
///
/// # Examples
///
/// ```
/// use lifexp_transform::extract_value;
///
/// assert_eq!(extract_value("74.3 e"), Some(74.3));
/// assert_eq!(extract_value("81"), Some(81.0));
/// assert_eq!(extract_value(": "), None);
/// assert_eq!(extract_value(""), None);
/// ```
pub fn extract_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed == MISSING_MARKER {
        return None;
    }
    let found = NUMERIC_PART.find(trimmed)?;
    // The pattern only admits ASCII digits and one dot, so parsing cannot
    // fail. Digit runs too long for f64 overflow to infinity and count as missing.
    found.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(extract_value("81"), Some(81.0));
        assert_eq!(extract_value("80.1"), Some(80.1));
        assert_eq!(extract_value("  80.1  "), Some(80.1));
    }

    #[test]
    fn test_flagged_numbers() {
        assert_eq!(extract_value("74.3 e"), Some(74.3));
        assert_eq!(extract_value("82.5 bep"), Some(82.5));
        assert_eq!(extract_value("79 p"), Some(79.0));
    }

    #[test]
    fn test_missing_markers() {
        assert_eq!(extract_value(":"), None);
        assert_eq!(extract_value(": "), None);
        assert_eq!(extract_value("  :  "), None);
        assert_eq!(extract_value(": c"), None);
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(extract_value(""), None);
        assert_eq!(extract_value("   "), None);
        assert_eq!(extract_value("n/a"), None);
    }

    #[test]
    fn test_dot_without_fraction() {
        // "81." has no fractional digits: the number is 81.
        assert_eq!(extract_value("81."), Some(81.0));
    }
}
