//! Workbook exports with one sheet per entity.

use std::path::Path;
use std::time::Instant;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{info, warn};

use gsc_model::{EntityKind, IngestWarning};

use crate::csv::check_file_size;
use crate::error::{IngestError, Result};
use crate::table::RawTable;

/// Sheets found in a workbook export.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    /// Tables in `EntityKind::ALL` order; absent sheets are left out.
    pub sheets: Vec<(EntityKind, RawTable)>,
    pub warnings: Vec<IngestWarning>,
}

/// Reads the `Queries`, `Pages` and `Countries` sheets of a workbook.
///
/// A missing sheet is not an error: it is recorded as a warning and the
/// remaining sheets are still loaded.
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    check_file_size(path)?;
    let start = Instant::now();
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let sheet_names = workbook.sheet_names();

    let mut result = Workbook::default();
    for entity in EntityKind::ALL {
        let Some(name) = sheet_names
            .iter()
            .find(|name| EntityKind::from_sheet_name(name) == Some(entity))
            .cloned()
        else {
            warn!(sheet = entity.sheet_name(), "sheet not found");
            result.warnings.push(IngestWarning::MissingSheet {
                sheet: entity.sheet_name().to_string(),
            });
            continue;
        };
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| IngestError::Workbook {
                path: path.to_path_buf(),
                message: format!("sheet '{name}': {e}"),
            })?;
        let records = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());
        let table = RawTable::from_records(name.clone(), records);
        info!(
            sheet = %name,
            columns = table.width(),
            rows = table.height(),
            "sheet loaded"
        );
        result.sheets.push((entity, table));
    }
    info!(
        path = %path.display(),
        sheets = result.sheets.len(),
        duration_ms = start.elapsed().as_millis(),
        "workbook loaded"
    );
    Ok(result)
}

/// Renders a cell the way it would appear in a CSV export.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        other => other.to_string(),
    }
}
