//! Impression-weighted aggregates.

use gsc_model::{Aggregates, MetricRow};

/// Totals and impression-weighted averages over `rows`.
///
/// CTR and position are weighted by impressions. With zero total
/// impressions both averages are 0.
/// Rows missing either factor add nothing to a weighted numerator.
pub fn aggregate<'a, I>(rows: I) -> Aggregates
where
    I: IntoIterator<Item = &'a MetricRow>,
{
    let mut result = Aggregates::default();
    let mut ctr_weighted = 0.0;
    let mut position_weighted = 0.0;
    for row in rows {
        result.row_count += 1;
        result.total_clicks += row.clicks.unwrap_or(0.0);
        let Some(impressions) = row.impressions else {
            continue;
        };
        result.total_impressions += impressions;
        if let Some(ctr) = row.ctr {
            ctr_weighted += ctr * impressions;
        }
        if let Some(position) = row.position {
            position_weighted += position * impressions;
        }
    }
    result.weighted_ctr = weighted_mean(ctr_weighted, result.total_impressions);
    result.weighted_position = weighted_mean(position_weighted, result.total_impressions);
    result
}

fn weighted_mean(weighted_sum: f64, total_weight: f64) -> f64 {
    if total_weight == 0.0 {
        0.0
    } else {
        weighted_sum / total_weight
    }
}
