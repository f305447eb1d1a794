use gsc_model::{Thresholds, WorkbookAnalysis};

/// What `gsc analyze` produced, with the thresholds it ran under.
#[derive(Debug)]
pub struct AnalyzeRun {
    pub analysis: WorkbookAnalysis,
    pub thresholds: Thresholds,
}
