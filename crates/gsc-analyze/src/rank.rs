//! Ordering rows by a metric.

use std::cmp::Ordering;

use gsc_model::{MetricField, MetricRow};

/// Descending order on `field`; unknown values sort last.
pub fn compare_desc(a: &MetricRow, b: &MetricRow, field: MetricField) -> Ordering {
    match (a.metric(field), b.metric(field)) {
        (Some(left), Some(right)) => right.total_cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort, highest `field` first.
pub fn sort_desc(rows: &mut [MetricRow], field: MetricField) {
    rows.sort_by(|a, b| compare_desc(a, b, field));
}

/// The `n` rows with the highest `field`, ties in input order.
pub fn top_n<'a, I>(rows: I, field: MetricField, n: usize) -> Vec<MetricRow>
where
    I: IntoIterator<Item = &'a MetricRow>,
{
    let mut ranked: Vec<&MetricRow> = rows.into_iter().collect();
    ranked.sort_by(|a, b| compare_desc(a, b, field));
    ranked.into_iter().take(n).cloned().collect()
}
