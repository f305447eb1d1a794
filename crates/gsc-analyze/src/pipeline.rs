//! The analysis pipeline: schema mapping, coercion, aggregation, ranking,
//! classification and recommendations.

use std::time::Instant;

use tracing::{info, info_span, warn};

use gsc_ingest::{RawTable, Workbook};
use gsc_model::{
    AnalysisOptions, AnalysisResult, EntityKind, IngestWarning, RowSet, WorkbookAnalysis,
};
use gsc_transform::{LoadedRows, Result, TransformError, build_row_set};

use crate::aggregate::aggregate;
use crate::classify::classify;
use crate::filter::filter_rows;
use crate::insights::recommendations;
use crate::rank::top_n;

/// Run the full pipeline over one table.
///
/// `entity` overrides header detection. Fails only when required columns are
/// missing; bad cells become unknown values.
pub fn analyze(
    table: &RawTable,
    entity: Option<EntityKind>,
    options: &AnalysisOptions,
) -> Result<AnalysisResult> {
    let span = info_span!("analyze", origin = %table.origin);
    let _guard = span.enter();

    let loaded = build_row_set(table, entity, &options.ctr_scale)?;
    Ok(analyze_rows(&table.origin, loaded, options))
}

/// Pipeline stages after the rows have been built.
pub fn analyze_rows(source: &str, loaded: LoadedRows, options: &AnalysisOptions) -> AnalysisResult {
    let start = Instant::now();
    let LoadedRows {
        row_set,
        coercion,
        ctr_scale,
    } = loaded;
    let RowSet {
        entity,
        layout,
        rows,
    } = row_set;

    let overall = aggregate(&rows);
    let (kpis, top_rows) = if options.sections.filters && options.filter.is_active() {
        let view = filter_rows(&rows, &options.filter);
        (
            aggregate(view.iter().copied()),
            top_n(view, entity.ranking_field(), options.top_n),
        )
    } else {
        (overall, top_n(&rows, entity.ranking_field(), options.top_n))
    };

    let classification = classify(&rows, &options.thresholds, options.sections.alerts);
    let recommendations = if options.sections.insights {
        recommendations(&classification, &options.thresholds, entity)
    } else {
        Vec::new()
    };

    let counts = classification.counts();
    info!(
        entity = %entity,
        rows = rows.len(),
        kpi_rows = kpis.row_count,
        opportunities = counts.opportunities,
        critical = counts.critical,
        warnings = counts.warnings,
        wins = counts.wins,
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );

    AnalysisResult {
        source: source.to_string(),
        entity,
        layout,
        ctr_scale,
        coercion,
        overall,
        kpis,
        top_rows,
        classification,
        recommendations,
    }
}

/// Analyze every sheet of a workbook export.
///
/// Sheets lacking required columns are skipped with a warning; the
/// workbook's own warnings about absent sheets are carried over.
pub fn analyze_workbook(workbook: &Workbook, options: &AnalysisOptions) -> WorkbookAnalysis {
    let mut analysis = WorkbookAnalysis {
        sections: Vec::with_capacity(workbook.sheets.len()),
        warnings: workbook.warnings.clone(),
    };
    for (entity, table) in &workbook.sheets {
        match analyze(table, Some(*entity), options) {
            Ok(result) => analysis.sections.push(result),
            Err(TransformError::MissingColumns { columns, .. }) => {
                warn!(sheet = %table.origin, missing = ?columns, "sheet skipped");
                analysis.warnings.push(IngestWarning::SheetMissingColumns {
                    sheet: table.origin.clone(),
                    columns,
                });
            }
        }
    }
    analysis
}
