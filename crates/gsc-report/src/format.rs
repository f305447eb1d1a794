//! KPI number formatting for display.

/// Rounded count with comma thousands separators: `1234567.4` -> `"1,234,567"`.
pub fn format_count(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage with two decimals: `2.7384` -> `"2.74%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Average position with two decimals.
pub fn format_position(value: f64) -> String {
    format!("{value:.2}")
}

/// A metric cell as written to CSV: shortest round-trip form, empty when unknown.
pub fn format_metric(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// A CTR cell as written to CSV: like [`format_metric`] with a `%` suffix,
/// so a reader never takes the column for fractions.
pub fn format_ctr_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v}%")).unwrap_or_default()
}

/// An optional metric for tables, with `-` for unknown values.
pub fn format_optional(value: Option<f64>, format: fn(f64) -> String) -> String {
    value.map_or_else(|| "-".to_string(), format)
}
