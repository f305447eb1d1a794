//! Machine-readable analysis report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use gsc_model::{AnalysisResult, IngestWarning, WorkbookAnalysis};

use crate::error::{ReportError, Result};
use crate::export::ensure_parent_dir;

/// Top-level JSON document: one section per analyzed table.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub sections: &'a [AnalysisResult],
    pub warnings: &'a [IngestWarning],
}

impl<'a> JsonReport<'a> {
    pub fn workbook(analysis: &'a WorkbookAnalysis) -> Self {
        Self {
            sections: &analysis.sections,
            warnings: &analysis.warnings,
        }
    }
}

/// Pretty-printed JSON to any writer.
pub fn write_json<W: Write>(mut writer: W, report: &JsonReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(serde_json::Error::io)?;
    Ok(())
}

/// Write the report to `path`.
pub fn write_json_report(path: &Path, report: &JsonReport<'_>) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    write_json(BufWriter::new(file), report)?;
    info!(
        path = %path.display(),
        sections = report.sections.len(),
        "json report written"
    );
    Ok(())
}
