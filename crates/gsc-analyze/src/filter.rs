//! Minimum-impressions and substring filter for the KPI view.

use gsc_model::{MetricRow, RowFilter};

/// True when `row` passes `filter`.
///
/// Rows with unknown impressions only pass when the minimum is zero or
/// below. The search term is matched case-insensitively anywhere in the
/// identifier.
pub fn matches_filter(row: &MetricRow, filter: &RowFilter) -> bool {
    let impressions_ok = match row.impressions {
        Some(impressions) => impressions >= filter.min_impressions,
        None => filter.min_impressions <= 0.0,
    };
    if !impressions_ok {
        return false;
    }
    match filter.search_term() {
        Some(term) => row
            .identifier
            .to_lowercase()
            .contains(&term.to_lowercase()),
        None => true,
    }
}

/// Rows passing `filter`, in input order.
pub fn filter_rows<'a>(rows: &'a [MetricRow], filter: &RowFilter) -> Vec<&'a MetricRow> {
    rows.iter().filter(|row| matches_filter(row, filter)).collect()
}
