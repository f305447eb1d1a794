//! Classification thresholds.
//!
//! Positions are 1-based ranks, CTR values are percentages (0-100).

use serde::{Deserialize, Serialize};

/// Best position (inclusive) still counted as an opportunity.
pub const OPPORTUNITY_POSITION_MIN: f64 = 5.0;
/// Worst position (inclusive) still counted as an opportunity.
pub const OPPORTUNITY_POSITION_MAX: f64 = 15.0;
/// Opportunities have a CTR strictly below this value.
pub const OPPORTUNITY_CTR_MAX: f64 = 5.0;

/// Critical alerts need strictly more impressions than this.
pub const CRITICAL_IMPRESSIONS_MIN: f64 = 1000.0;
/// Critical alerts have a CTR strictly below this value.
pub const CRITICAL_CTR_MAX: f64 = 1.0;

/// Impression-surge warnings need strictly more impressions than this.
pub const SURGE_IMPRESSIONS_MIN: f64 = 1000.0;
/// Impression-surge warnings have strictly fewer clicks than this.
pub const SURGE_CLICKS_MAX: f64 = 10.0;
/// CTR ceiling applied to surges when `surge_requires_low_ctr` is set.
pub const SURGE_CTR_MAX: f64 = 1.0;

/// Wins have a CTR strictly above this value.
pub const WIN_CTR_MIN: f64 = 10.0;
/// Wins rank strictly worse than this position.
pub const WIN_POSITION_MIN: f64 = 10.0;

/// Tunable copy of the classification constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub opportunity_position_min: f64,
    pub opportunity_position_max: f64,
    pub opportunity_ctr_max: f64,
    pub critical_impressions_min: f64,
    pub critical_ctr_max: f64,
    pub surge_impressions_min: f64,
    pub surge_clicks_max: f64,
    pub surge_ctr_max: f64,
    /// Also require a low CTR before flagging an impression surge.
    pub surge_requires_low_ctr: bool,
    pub win_ctr_min: f64,
    pub win_position_min: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            opportunity_position_min: OPPORTUNITY_POSITION_MIN,
            opportunity_position_max: OPPORTUNITY_POSITION_MAX,
            opportunity_ctr_max: OPPORTUNITY_CTR_MAX,
            critical_impressions_min: CRITICAL_IMPRESSIONS_MIN,
            critical_ctr_max: CRITICAL_CTR_MAX,
            surge_impressions_min: SURGE_IMPRESSIONS_MIN,
            surge_clicks_max: SURGE_CLICKS_MAX,
            surge_ctr_max: SURGE_CTR_MAX,
            surge_requires_low_ctr: false,
            win_ctr_min: WIN_CTR_MIN,
            win_position_min: WIN_POSITION_MIN,
        }
    }
}
