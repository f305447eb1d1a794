//! Analysis options from a TOML file plus command-line overrides.
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! top_n = 20
//!
//! [thresholds]
//! opportunity_ctr_max = 3.0
//!
//! [filter]
//! min_impressions = 100.0
//!
//! [ctr_scale]
//! rescale = false
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use gsc_model::AnalysisOptions;

/// Parse options from TOML text.
pub fn parse_config(text: &str) -> Result<AnalysisOptions> {
    toml::from_str(text).context("parse analysis config")
}

/// Load options from `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisOptions> {
    let Some(path) = path else {
        return Ok(AnalysisOptions::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let options = parse_config(&text).with_context(|| format!("load {}", path.display()))?;
    debug!(path = %path.display(), "analysis config loaded");
    Ok(options)
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionOverrides {
    pub min_impressions: Option<f64>,
    pub search: Option<String>,
    pub top_n: Option<usize>,
    pub ctr_fraction_max: Option<f64>,
    pub no_ctr_rescale: bool,
    pub surge_requires_low_ctr: bool,
    pub no_alerts: bool,
    pub no_insights: bool,
    pub no_filters: bool,
}

impl OptionOverrides {
    /// Apply the overrides on top of `options`.
    ///
    /// Switch flags only ever turn things off (or on, for the surge CTR
    /// check); an unset flag leaves the file's value alone.
    pub fn apply(&self, mut options: AnalysisOptions) -> AnalysisOptions {
        if let Some(min) = self.min_impressions {
            options.filter.min_impressions = min;
        }
        if let Some(search) = &self.search {
            options.filter.search = Some(search.clone());
        }
        if let Some(top_n) = self.top_n {
            options.top_n = top_n;
        }
        if let Some(cutoff) = self.ctr_fraction_max {
            options.ctr_scale.assume_fraction_if_max_leq = cutoff;
        }
        if self.no_ctr_rescale {
            options.ctr_scale.rescale = false;
        }
        if self.surge_requires_low_ctr {
            options.thresholds.surge_requires_low_ctr = true;
        }
        if self.no_alerts {
            options.sections.alerts = false;
        }
        if self.no_insights {
            options.sections.insights = false;
        }
        if self.no_filters {
            options.sections.filters = false;
        }
        options
    }
}
