//! In-memory string table shared by the CSV and workbook readers.

use crate::csv::normalize_header;

/// A loaded table before any schema mapping or numeric coercion.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// File or sheet the table came from.
    pub origin: String,
    /// Header cells as found in the source, trimmed.
    pub headers: Vec<String>,
    /// Data cells exactly as read; numeric coercion trims on its own.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(origin: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers: Vec<String> = headers.iter().map(|value| clean_header(value)).collect();
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|row| fit_row(row, width))
            .collect();
        Self {
            origin: origin.into(),
            headers,
            rows,
        }
    }

    /// Builds a table from raw records: blank records are skipped and the first
    /// remaining record is the header row.
    pub fn from_records<I>(origin: impl Into<String>, records: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut records = records
            .into_iter()
            .filter(|record| record.iter().any(|value| !value.trim().is_empty()));
        let Some(headers) = records.next() else {
            return Self {
                origin: origin.into(),
                ..Self::default()
            };
        };
        Self::new(origin, headers, records.collect())
    }

    /// Header names after [`normalize_header`].
    pub fn normalized_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .map(|header| normalize_header(header))
            .collect()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

fn clean_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn fit_row(row: Vec<String>, width: usize) -> Vec<String> {
    let mut cells: Vec<String> = row.into_iter().take(width).collect();
    cells.resize(width, String::new());
    cells
}
