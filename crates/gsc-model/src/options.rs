//! Configuration options for an analysis run.

use serde::{Deserialize, Serialize};

use crate::thresholds::Thresholds;

/// Default CTR ceiling below which a column is read as fractions.
pub const DEFAULT_CTR_FRACTION_MAX: f64 = 1.0;

/// Default number of rows in the top-rows view.
pub const DEFAULT_TOP_N: usize = 10;

/// How to detect CTR columns exported as fractions (0-1) instead of percentages.
///
/// The decision is made once per table from the largest CTR value. A table
/// whose real percentages never exceed the cutoff is rescaled by mistake, so
/// the check can be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtrScalePolicy {
    pub rescale: bool,
    pub assume_fraction_if_max_leq: f64,
}

impl Default for CtrScalePolicy {
    fn default() -> Self {
        Self {
            rescale: true,
            assume_fraction_if_max_leq: DEFAULT_CTR_FRACTION_MAX,
        }
    }
}

impl CtrScalePolicy {
    pub fn disabled() -> Self {
        Self {
            rescale: false,
            ..Self::default()
        }
    }

    /// The cutoff to apply, or `None` when rescaling is off.
    pub fn fraction_cutoff(&self) -> Option<f64> {
        self.rescale.then_some(self.assume_fraction_if_max_leq)
    }
}

/// Minimum-impressions and substring filter for the KPI view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowFilter {
    pub min_impressions: f64,
    /// Case-insensitive substring matched against the row identifier.
    pub search: Option<String>,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_impressions(mut self, min_impressions: f64) -> Self {
        self.min_impressions = min_impressions;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The search needle, ignoring blank input.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Whether the filter can drop any row.
    pub fn is_active(&self) -> bool {
        self.min_impressions > 0.0 || self.search_term().is_some()
    }
}

/// Optional parts of the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    /// Critical / warning / win buckets.
    pub alerts: bool,
    /// Recommendation text.
    pub insights: bool,
    /// Apply [`RowFilter`] to the KPI view.
    pub filters: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            alerts: true,
            insights: true,
            filters: true,
        }
    }
}

/// Everything that parameterizes one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub thresholds: Thresholds,
    pub ctr_scale: CtrScalePolicy,
    pub filter: RowFilter,
    pub sections: Sections,
    pub top_n: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            ctr_scale: CtrScalePolicy::default(),
            filter: RowFilter::default(),
            sections: Sections::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_ctr_scale(mut self, policy: CtrScalePolicy) -> Self {
        self.ctr_scale = policy;
        self
    }

    pub fn with_filter(mut self, filter: RowFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sections(mut self, sections: Sections) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
