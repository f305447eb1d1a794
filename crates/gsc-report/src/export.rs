//! Opportunity CSV export.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use gsc_model::{AnalysisResult, ColumnLayout, ColumnRole, MetricField, MetricRow};

use crate::error::{ReportError, Result};
use crate::format::{format_ctr_cell, format_metric};

/// Default file name offered for the opportunity export.
pub const OPPORTUNITIES_FILE_NAME: &str = "opportunity_keywords.csv";

/// Create the parent directory of `path` when it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }
    Ok(())
}

/// Write `rows` as CSV with the columns of `layout`, in layout order.
///
/// Schema columns use their canonical names. Unknown metrics are empty
/// cells; numbers use the shortest form that parses back to the same value
/// and CTR carries a `%` suffix.
pub fn write_rows_csv<W: Write>(writer: W, layout: &ColumnLayout, rows: &[MetricRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(&layout.columns)?;
    for row in rows {
        let record = layout.iter().map(|(_, role)| match role {
            ColumnRole::Identifier => row.identifier.clone(),
            ColumnRole::Metric(MetricField::Ctr) => format_ctr_cell(row.ctr),
            ColumnRole::Metric(field) => format_metric(row.metric(field)),
            ColumnRole::Extra(index) => row.extras.get(index).cloned().unwrap_or_default(),
        });
        writer.write_record(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the opportunity bucket of `result` to `path`.
pub fn export_opportunities(path: &Path, result: &AnalysisResult) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    let rows = &result.classification.opportunities;
    write_rows_csv(BufWriter::new(file), &result.layout, rows)?;
    info!(
        path = %path.display(),
        rows = rows.len(),
        "opportunities exported"
    );
    Ok(())
}
