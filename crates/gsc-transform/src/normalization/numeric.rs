//! Numeric coercion of export cells.
//!
//! Search Console writes counts with thousands separators ("1,234") and CTR
//! with a percent sign ("4.5%"). Anything that still fails to parse is
//! treated as unknown rather than as an error.

/// Parse a cell value to a number.
///
/// Handles:
/// - Standard numbers: "123", "-45.67"
/// - Thousands separators: "1,234,567", "1 234", "1\u{a0}234"
/// - Surrounding whitespace
/// - Scientific notation: "1.23e5"
///
/// Returns `None` for empty, unparseable or non-finite values.
pub fn coerce(value: &str) -> Option<f64> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return None;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|ch| !matches!(ch, ',' | ' ' | '\u{a0}'))
        .collect();

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a click-through-rate cell, accepting a trailing percent sign.
pub fn coerce_ctr(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    coerce(trimmed.strip_suffix('%').unwrap_or(trimmed))
}

/// True when the cell is written as a percentage ("4.5%").
pub fn has_percent_sign(value: &str) -> bool {
    value.trim().ends_with('%')
}

/// True when the cell holds text that did not coerce.
pub fn is_unparsable(value: &str, coerced: Option<f64>) -> bool {
    coerced.is_none() && !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_integer() {
        assert_eq!(coerce("123"), Some(123.0));
        assert_eq!(coerce("-456"), Some(-456.0));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(coerce("123.45"), Some(123.45));
        assert_eq!(coerce("7.1"), Some(7.1));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(coerce("1,234"), Some(1234.0));
        assert_eq!(coerce("1,234,567"), Some(1234567.0));
        assert_eq!(coerce("1,234.56"), Some(1234.56));
        assert_eq!(coerce("1\u{a0}234"), Some(1234.0));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(coerce("  123  "), Some(123.0));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(coerce("1.5E-3"), Some(0.0015));
    }

    #[test]
    fn test_empty_and_invalid() {
        assert_eq!(coerce(""), None);
        assert_eq!(coerce("  "), None);
        assert_eq!(coerce("abc"), None);
        assert_eq!(coerce("12.34.56"), None);
    }

    #[test]
    fn test_non_finite_is_unknown() {
        assert_eq!(coerce("nan"), None);
        assert_eq!(coerce("inf"), None);
        assert_eq!(coerce("-Infinity"), None);
    }

    #[test]
    fn test_ctr_percent_sign() {
        assert_eq!(coerce_ctr("4.5%"), Some(4.5));
        assert_eq!(coerce_ctr(" 12.25 % "), Some(12.25));
        assert_eq!(coerce_ctr("0.045"), Some(0.045));
        assert_eq!(coerce_ctr("%"), None);
    }

    #[test]
    fn test_plain_coerce_rejects_percent() {
        assert_eq!(coerce("4.5%"), None);
    }

    #[test]
    fn test_has_percent_sign() {
        assert!(has_percent_sign("0.3%"));
        assert!(has_percent_sign(" 12 % "));
        assert!(!has_percent_sign("0.3"));
        assert!(!has_percent_sign(""));
    }

    #[test]
    fn test_is_unparsable() {
        assert!(is_unparsable("n/a", coerce("n/a")));
        assert!(!is_unparsable("", coerce("")));
        assert!(!is_unparsable("3", coerce("3")));
    }
}
