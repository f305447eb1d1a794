pub mod analysis;
pub mod entity;
pub mod error;
pub mod options;
pub mod row;
pub mod thresholds;

pub use analysis::{
    Aggregates, AnalysisResult, BucketCounts, Classification, CoercionStats, CtrScale,
    IngestWarning, WorkbookAnalysis,
};
pub use entity::{EntityKind, MetricField};
pub use error::{ModelError, Result};
pub use options::{
    AnalysisOptions, CtrScalePolicy, DEFAULT_CTR_FRACTION_MAX, DEFAULT_TOP_N, RowFilter, Sections,
};
pub use row::{ColumnLayout, ColumnRole, MetricRow, RowSet};
pub use thresholds::Thresholds;
