//! Building typed rows from a raw table.

use std::time::Instant;

use tracing::{debug, info};

use gsc_ingest::RawTable;
use gsc_model::{
    CoercionStats, ColumnLayout, ColumnRole, CtrScale, CtrScalePolicy, EntityKind, MetricField,
    MetricRow, RowSet,
};

use crate::error::Result;
use crate::normalization::{
    coerce, coerce_ctr, has_percent_sign, is_unparsable, normalize_ctr_scale,
};
use crate::schema::{ColumnSchema, detect_entity};

/// Typed rows plus what happened while producing them.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRows {
    pub row_set: RowSet,
    pub coercion: CoercionStats,
    pub ctr_scale: CtrScale,
}

/// Resolve the entity for a table: explicit choice, then header detection,
/// then queries.
pub fn resolve_entity(table: &RawTable, entity: Option<EntityKind>) -> EntityKind {
    entity
        .or_else(|| detect_entity(&table.normalized_headers()))
        .unwrap_or(EntityKind::Query)
}

/// Validate the table's columns and coerce every row.
///
/// Fails with `MissingColumns` before any row is read. Rows without a single
/// known metric are dropped; the CTR column is then brought to percent. A
/// CTR column with any `%`-suffixed cell is already in percent and skips the
/// fraction check.
pub fn build_row_set(
    table: &RawTable,
    entity: Option<EntityKind>,
    policy: &CtrScalePolicy,
) -> Result<LoadedRows> {
    let start = Instant::now();
    let entity = resolve_entity(table, entity);
    let layout = ColumnSchema::new(entity).resolve(&table.origin, &table.normalized_headers())?;

    let mut coercion = CoercionStats {
        source_rows: table.height(),
        ..CoercionStats::default()
    };
    let mut rows = Vec::with_capacity(table.height());
    let ctr_index = layout
        .roles
        .iter()
        .position(|role| *role == ColumnRole::Metric(MetricField::Ctr));
    let mut percent_marked = false;
    for cells in &table.rows {
        let (row, unparsable) = coerce_row(&layout, cells);
        coercion.unparsable_cells += unparsable;
        percent_marked |= ctr_index
            .and_then(|index| cells.get(index))
            .is_some_and(|cell| has_percent_sign(cell));
        if row.has_any_metric() {
            rows.push(row);
        } else {
            coercion.dropped_rows += 1;
        }
    }
    if coercion.unparsable_cells > 0 {
        debug!(
            origin = %table.origin,
            cells = coercion.unparsable_cells,
            "unparsable metric cells treated as unknown"
        );
    }

    let ctr_scale = if percent_marked {
        debug!(origin = %table.origin, "ctr cells carry a percent sign, fraction check skipped");
        CtrScale::Percent
    } else {
        normalize_ctr_scale(&mut rows, policy)
    };
    info!(
        origin = %table.origin,
        entity = %entity,
        rows = rows.len(),
        dropped = coercion.dropped_rows,
        ctr_scale = ?ctr_scale,
        duration_ms = start.elapsed().as_millis(),
        "rows coerced"
    );
    Ok(LoadedRows {
        row_set: RowSet {
            entity,
            layout,
            rows,
        },
        coercion,
        ctr_scale,
    })
}

/// Coerce one record; returns the row and its count of unparsable cells.
fn coerce_row(layout: &ColumnLayout, cells: &[String]) -> (MetricRow, usize) {
    let mut row = MetricRow::new(String::new());
    let mut unparsable = 0usize;
    for ((_, role), cell) in layout.iter().zip(cells) {
        match role {
            ColumnRole::Identifier => row.identifier = cell.clone(),
            ColumnRole::Metric(field) => {
                let value = match field {
                    MetricField::Ctr => coerce_ctr(cell),
                    _ => coerce(cell),
                };
                if is_unparsable(cell, value) {
                    unparsable += 1;
                }
                row.set_metric(field, value);
            }
            ColumnRole::Extra(_) => row.extras.push(cell.clone()),
        }
    }
    (row, unparsable)
}
