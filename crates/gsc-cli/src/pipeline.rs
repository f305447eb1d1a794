//! Loading an input file and running the analysis over it.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, trace, warn};

use gsc_analyze::{analyze, analyze_workbook};
use gsc_ingest::{InputFormat, read_csv_table, read_workbook};
use gsc_model::{AnalysisOptions, AnalysisResult, EntityKind, WorkbookAnalysis};

use crate::logging::redact_value;

/// Analyze a CSV or workbook export.
///
/// A CSV yields one section. A workbook yields one per usable sheet and
/// fails only when none of its sheets could be analyzed.
pub fn run_analysis(
    path: &Path,
    entity: Option<EntityKind>,
    options: &AnalysisOptions,
) -> Result<WorkbookAnalysis> {
    let span = info_span!("run", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let analysis = match InputFormat::from_path(path)? {
        InputFormat::Csv => {
            let table = read_csv_table(path)?;
            let result = analyze(&table, entity, options)
                .with_context(|| format!("analyze {}", path.display()))?;
            WorkbookAnalysis {
                sections: vec![result],
                warnings: Vec::new(),
            }
        }
        InputFormat::Workbook => {
            if let Some(entity) = entity {
                warn!(%entity, "entity is taken from sheet names for workbooks, flag ignored");
            }
            let workbook = read_workbook(path)?;
            let analysis = analyze_workbook(&workbook, options);
            if analysis.sections.is_empty() {
                bail!(
                    "{} has no sheet that could be analyzed ({} warnings)",
                    path.display(),
                    analysis.warnings.len()
                );
            }
            analysis
        }
    };

    for section in &analysis.sections {
        for row in &section.top_rows {
            trace!(
                entity = %section.entity,
                identifier = redact_value(&row.identifier),
                clicks = ?row.clicks,
                impressions = ?row.impressions,
                "top row"
            );
        }
    }
    info!(
        sections = analysis.sections.len(),
        warnings = analysis.warnings.len(),
        duration_ms = start.elapsed().as_millis(),
        "input analyzed"
    );
    Ok(analysis)
}

/// The section whose opportunities are exported: queries when present,
/// otherwise the first section.
pub fn export_section(analysis: &WorkbookAnalysis) -> Option<&AnalysisResult> {
    analysis
        .section(EntityKind::Query)
        .or_else(|| analysis.sections.first())
}
