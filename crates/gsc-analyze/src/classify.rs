//! Threshold classification of rows.
//!
//! Buckets overlap: one row may be an opportunity and an alert at once.
//! Comparisons involving an unknown metric are false.

use gsc_model::{Classification, MetricField, MetricRow, Thresholds};

use crate::rank::sort_desc;

/// Ranked on page one or two with a CTR low enough to improve through metadata.
pub fn is_opportunity(row: &MetricRow, thresholds: &Thresholds) -> bool {
    match (row.position, row.ctr) {
        (Some(position), Some(ctr)) => {
            position >= thresholds.opportunity_position_min
                && position <= thresholds.opportunity_position_max
                && ctr < thresholds.opportunity_ctr_max
        }
        _ => false,
    }
}

/// Plenty of impressions, almost no clicks through.
pub fn is_critical(row: &MetricRow, thresholds: &Thresholds) -> bool {
    match (row.impressions, row.ctr) {
        (Some(impressions), Some(ctr)) => {
            impressions > thresholds.critical_impressions_min && ctr < thresholds.critical_ctr_max
        }
        _ => false,
    }
}

/// Impressions are surging while clicks stay in single digits.
pub fn is_impression_surge(row: &MetricRow, thresholds: &Thresholds) -> bool {
    let (Some(impressions), Some(clicks)) = (row.impressions, row.clicks) else {
        return false;
    };
    if impressions <= thresholds.surge_impressions_min || clicks >= thresholds.surge_clicks_max {
        return false;
    }
    if thresholds.surge_requires_low_ctr {
        return row.ctr.is_some_and(|ctr| ctr < thresholds.surge_ctr_max);
    }
    true
}

/// Strong CTR despite a weak ranking.
pub fn is_win(row: &MetricRow, thresholds: &Thresholds) -> bool {
    match (row.ctr, row.position) {
        (Some(ctr), Some(position)) => {
            ctr > thresholds.win_ctr_min && position > thresholds.win_position_min
        }
        _ => false,
    }
}

fn select(rows: &[MetricRow], predicate: impl Fn(&MetricRow) -> bool) -> Vec<MetricRow> {
    rows.iter().filter(|row| predicate(*row)).cloned().collect()
}

/// Sort rows into buckets.
///
/// Opportunities are always computed and ordered by impressions, highest
/// first. Alert buckets stay empty when `include_alerts` is false.
pub fn classify(rows: &[MetricRow], thresholds: &Thresholds, include_alerts: bool) -> Classification {
    let mut opportunities = select(rows, |row| is_opportunity(row, thresholds));
    sort_desc(&mut opportunities, MetricField::Impressions);

    if !include_alerts {
        return Classification {
            opportunities,
            ..Classification::default()
        };
    }
    Classification {
        opportunities,
        critical: select(rows, |row| is_critical(row, thresholds)),
        warnings: select(rows, |row| is_impression_surge(row, thresholds)),
        wins: select(rows, |row| is_win(row, thresholds)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(clicks: f64, impressions: f64, ctr: f64, position: f64) -> MetricRow {
        MetricRow::from_values("q", clicks, impressions, ctr, position)
    }

    #[test]
    fn opportunity_band() {
        let t = Thresholds::default();
        assert!(is_opportunity(&row(1.0, 100.0, 3.0, 8.0), &t));
        assert!(!is_opportunity(&row(1.0, 100.0, 6.0, 8.0), &t));
        assert!(is_opportunity(&row(1.0, 100.0, 4.99, 5.0), &t));
        assert!(is_opportunity(&row(1.0, 100.0, 0.0, 15.0), &t));
        assert!(!is_opportunity(&row(1.0, 100.0, 5.0, 8.0), &t));
        assert!(!is_opportunity(&row(1.0, 100.0, 1.0, 15.01), &t));
        assert!(!is_opportunity(&row(1.0, 100.0, 1.0, 4.9), &t));
    }

    #[test]
    fn critical_and_surge() {
        let t = Thresholds::default();
        let low_ctr = row(50.0, 2000.0, 0.5, 3.0);
        assert!(is_critical(&low_ctr, &t));
        assert!(!is_impression_surge(&low_ctr, &t));

        let few_clicks = row(5.0, 2000.0, 0.5, 3.0);
        assert!(is_critical(&few_clicks, &t));
        assert!(is_impression_surge(&few_clicks, &t));

        assert!(!is_critical(&row(5.0, 1000.0, 0.5, 3.0), &t));
    }

    #[test]
    fn surge_variant_requires_low_ctr() {
        let t = Thresholds {
            surge_requires_low_ctr: true,
            ..Thresholds::default()
        };
        assert!(is_impression_surge(&row(9.0, 1500.0, 0.6, 3.0), &t));
        assert!(!is_impression_surge(&row(9.0, 1500.0, 1.2, 3.0), &t));

        let mut unknown_ctr = row(9.0, 1500.0, 0.0, 3.0);
        unknown_ctr.ctr = None;
        assert!(!is_impression_surge(&unknown_ctr, &t));
        assert!(is_impression_surge(&unknown_ctr, &Thresholds::default()));
    }

    #[test]
    fn win_needs_high_ctr_and_weak_position() {
        let t = Thresholds::default();
        assert!(is_win(&row(30.0, 200.0, 15.0, 11.0), &t));
        assert!(!is_win(&row(30.0, 200.0, 15.0, 10.0), &t));
        assert!(!is_win(&row(30.0, 200.0, 10.0, 20.0), &t));
    }

    #[test]
    fn unknown_metrics_never_match() {
        let t = Thresholds::default();
        let empty = MetricRow::new("unknown");
        assert!(!is_opportunity(&empty, &t));
        assert!(!is_critical(&empty, &t));
        assert!(!is_impression_surge(&empty, &t));
        assert!(!is_win(&empty, &t));
    }

    #[test]
    fn classify_orders_opportunities_by_impressions() {
        let rows = vec![
            MetricRow::from_values("small", 1.0, 100.0, 1.0, 9.0),
            MetricRow::from_values("big", 2.0, 5000.0, 0.04, 7.0),
            MetricRow::from_values("top", 90.0, 300.0, 30.0, 1.0),
        ];
        let classification = classify(&rows, &Thresholds::default(), true);

        let ids: Vec<&str> = classification
            .opportunities
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["big", "small"]);
        assert_eq!(classification.critical.len(), 1);
        assert_eq!(classification.warnings.len(), 1);
        assert!(classification.wins.is_empty());

        let without_alerts = classify(&rows, &Thresholds::default(), false);
        assert_eq!(without_alerts.opportunities.len(), 2);
        assert_eq!(without_alerts.alert_count(), 0);
    }
}
