//! Search Console export ingestion.
//!
//! This crate loads performance exports into [`RawTable`]s of strings.
//! Nothing here interprets cell values; schema mapping and numeric coercion
//! happen in `gsc-transform`.
//!
//! # Features
//!
//! - **CSV Loading**: `Queries.csv`-style exports from disk or any reader
//! - **Workbook Loading**: `Queries`, `Pages` and `Countries` sheets of an XLSX/ODS export
//! - **Header Normalization**: lower-case, trimmed, underscore-separated names
//! - **Guards**: file size limit and UTF-16 detection
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gsc_ingest::{InputFormat, read_csv_table, read_workbook};
//!
//! let path = Path::new("exports/Queries.csv");
//! match InputFormat::from_path(path)? {
//!     InputFormat::Csv => {
//!         let table = read_csv_table(path)?;
//!         println!("{} rows", table.height());
//!     }
//!     InputFormat::Workbook => {
//!         let workbook = read_workbook(path)?;
//!         println!("{} sheets", workbook.sheets.len());
//!     }
//! }
//! ```

mod csv;
mod error;
mod format;
mod table;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_INPUT_FILE_SIZE, check_file_size, check_file_size_with_limit, normalize_header,
    read_csv_reader, read_csv_table, validate_encoding,
};

// === Tables ===
pub use format::InputFormat;
pub use table::RawTable;

// === Workbooks ===
pub use workbook::{Workbook, read_workbook};
