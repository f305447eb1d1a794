//! Pipeline results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;
use crate::row::{ColumnLayout, MetricRow};

/// Scale the CTR column was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtrScale {
    /// Already 0-100.
    #[default]
    Percent,
    /// Read as 0-1 and multiplied by 100.
    Fraction,
}

/// Counters collected while coercing cells to numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionStats {
    /// Data rows read from the source table.
    pub source_rows: usize,
    /// Non-empty metric cells that did not parse.
    pub unparsable_cells: usize,
    /// Rows without any known metric, excluded from the row set.
    pub dropped_rows: usize,
}

/// Impression-weighted totals for a set of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub row_count: usize,
    pub total_clicks: f64,
    pub total_impressions: f64,
    /// Percentage, 0 when there are no impressions.
    pub weighted_ctr: f64,
    /// 0 when there are no impressions.
    pub weighted_position: f64,
}

/// Rows sorted into the threshold buckets. A row may sit in several.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub opportunities: Vec<MetricRow>,
    pub critical: Vec<MetricRow>,
    pub warnings: Vec<MetricRow>,
    pub wins: Vec<MetricRow>,
}

impl Classification {
    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            opportunities: self.opportunities.len(),
            critical: self.critical.len(),
            warnings: self.warnings.len(),
            wins: self.wins.len(),
        }
    }

    pub fn alert_count(&self) -> usize {
        self.critical.len() + self.warnings.len() + self.wins.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub opportunities: usize,
    pub critical: usize,
    pub warnings: usize,
    pub wins: usize,
}

/// Non-fatal problems found while loading a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IngestWarning {
    /// Expected workbook sheet is absent.
    MissingSheet { sheet: String },
    /// Sheet is present but lacks required columns.
    SheetMissingColumns { sheet: String, columns: Vec<String> },
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestWarning::MissingSheet { sheet } => {
                write!(f, "sheet '{sheet}' not found, section skipped")
            }
            IngestWarning::SheetMissingColumns { sheet, columns } => write!(
                f,
                "sheet '{sheet}' is missing columns: {}, section skipped",
                columns.join(", ")
            ),
        }
    }
}

/// Structured output of one pipeline run over one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Human-readable origin (file name or sheet name).
    pub source: String,
    pub entity: EntityKind,
    pub layout: ColumnLayout,
    pub ctr_scale: CtrScale,
    pub coercion: CoercionStats,
    /// Aggregates over every retained row.
    pub overall: Aggregates,
    /// Aggregates over the filtered view.
    pub kpis: Aggregates,
    /// Top rows of the filtered view.
    pub top_rows: Vec<MetricRow>,
    /// Buckets over the unfiltered rows.
    pub classification: Classification,
    pub recommendations: Vec<String>,
}

/// One result per workbook sheet that could be analyzed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkbookAnalysis {
    pub sections: Vec<AnalysisResult>,
    pub warnings: Vec<IngestWarning>,
}

impl WorkbookAnalysis {
    pub fn section(&self, entity: EntityKind) -> Option<&AnalysisResult> {
        self.sections.iter().find(|section| section.entity == entity)
    }
}
