//! Plain-text recommendations derived from bucket counts.

use gsc_model::{BucketCounts, Classification, EntityKind, Thresholds};

/// Returned when no bucket has any rows.
pub const ALL_CLEAR: &str = "No opportunities or alerts detected. Keep monitoring performance.";

fn noun(entity: EntityKind, count: usize) -> &'static str {
    match (entity, count == 1) {
        (EntityKind::Query, true) => "keyword",
        (EntityKind::Query, false) => "keywords",
        (EntityKind::Page, true) => "page",
        (EntityKind::Page, false) => "pages",
        (EntityKind::Country, true) => "country",
        (EntityKind::Country, false) => "countries",
    }
}

fn verb(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Recommendation lines in fixed order: opportunities, critical, surges, wins.
pub fn recommendations(
    classification: &Classification,
    thresholds: &Thresholds,
    entity: EntityKind,
) -> Vec<String> {
    recommendations_for_counts(&classification.counts(), thresholds, entity)
}

/// Same as [`recommendations`] but from counts alone.
pub fn recommendations_for_counts(
    counts: &BucketCounts,
    thresholds: &Thresholds,
    entity: EntityKind,
) -> Vec<String> {
    let mut lines = Vec::new();

    if counts.opportunities > 0 {
        let n = counts.opportunities;
        lines.push(format!(
            "{n} {} {} between position {} and {} with CTR below {}%. \
             Rewrite titles and meta descriptions to win more clicks.",
            noun(entity, n),
            verb(n, "ranks", "rank"),
            thresholds.opportunity_position_min,
            thresholds.opportunity_position_max,
            thresholds.opportunity_ctr_max,
        ));
    }
    if counts.critical > 0 {
        let n = counts.critical;
        lines.push(format!(
            "{n} {} {} more than {} impressions but CTR below {}%. \
             Check search intent and snippet relevance first.",
            noun(entity, n),
            verb(n, "has", "have"),
            thresholds.critical_impressions_min,
            thresholds.critical_ctr_max,
        ));
    }
    if counts.warnings > 0 {
        let n = counts.warnings;
        lines.push(format!(
            "{n} {} {} more than {} impressions but fewer than {} clicks. \
             Visibility is growing faster than traffic.",
            noun(entity, n),
            verb(n, "gets", "get"),
            thresholds.surge_impressions_min,
            thresholds.surge_clicks_max,
        ));
    }
    if counts.wins > 0 {
        let n = counts.wins;
        lines.push(format!(
            "{n} {} {} CTR above {}% despite ranking below position {}. \
             Improving rankings here should pay off quickly.",
            noun(entity, n),
            verb(n, "earns", "earn"),
            thresholds.win_ctr_min,
            thresholds.win_position_min,
        ));
    }

    if lines.is_empty() {
        lines.push(ALL_CLEAR.to_string());
    }
    lines
}
