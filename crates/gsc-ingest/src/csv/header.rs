//! Header normalization.

/// Normalizes a header cell to its canonical form.
///
/// Strips a byte-order mark, trims, lower-cases and replaces every space
/// with an underscore: `" Top queries "` becomes `"top_queries"`.
pub fn normalize_header(value: &str) -> String {
    value
        .trim_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Clicks  "), "clicks");
        assert_eq!(normalize_header("Top queries"), "top_queries");
        assert_eq!(normalize_header("CTR"), "ctr");
    }

    #[test]
    fn test_normalize_header_strips_bom() {
        assert_eq!(normalize_header("\u{feff}Top pages"), "top_pages");
    }

    #[test]
    fn test_normalize_header_keeps_each_space() {
        assert_eq!(normalize_header("Avg.  position"), "avg.__position");
    }
}
