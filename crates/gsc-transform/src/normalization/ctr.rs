//! CTR scale detection.

use tracing::{debug, warn};

use gsc_model::{CtrScale, CtrScalePolicy, MetricRow};

/// Largest known CTR value, if any.
pub fn max_ctr(rows: &[MetricRow]) -> Option<f64> {
    rows.iter()
        .filter_map(|row| row.ctr)
        .filter(|value| value.is_finite())
        .reduce(f64::max)
}

/// Decide whether the CTR column holds fractions (0-1) or percentages.
///
/// The decision covers the whole column: a column is read as fractions when
/// its maximum is at or below the policy cutoff. Columns without any known
/// CTR are left as percentages.
pub fn detect_ctr_scale(rows: &[MetricRow], policy: &CtrScalePolicy) -> CtrScale {
    let Some(cutoff) = policy.fraction_cutoff() else {
        return CtrScale::Percent;
    };
    match max_ctr(rows) {
        Some(max) if max <= cutoff => CtrScale::Fraction,
        _ => CtrScale::Percent,
    }
}

/// Bring the CTR column to the 0-100 scale in place.
pub fn normalize_ctr_scale(rows: &mut [MetricRow], policy: &CtrScalePolicy) -> CtrScale {
    let scale = detect_ctr_scale(rows, policy);
    match scale {
        CtrScale::Fraction => {
            // A low-CTR table in percent would also land here.
            warn!(
                cutoff = policy.assume_fraction_if_max_leq,
                rows = rows.len(),
                "ctr column read as fractions, rescaling to percent"
            );
            for ctr in rows.iter_mut().filter_map(|row| row.ctr.as_mut()) {
                *ctr *= 100.0;
            }
        }
        CtrScale::Percent => {
            debug!(max_ctr = ?max_ctr(rows), "ctr column already in percent");
        }
    }
    scale
}
