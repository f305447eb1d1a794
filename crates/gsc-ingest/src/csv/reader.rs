//! CSV file reading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::table::RawTable;

/// Maximum file size for loading an export (500 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_INPUT_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::open_failed(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject UTF-16 input; Search Console exports are UTF-8, optionally with a BOM.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open_failed(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a CSV export from disk.
///
/// The first non-blank record is the header row.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    check_file_size(path)?;
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| IngestError::open_failed(path, e))?;
    let origin = path
        .file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string);
    read_csv_reader(BufReader::new(file), &origin)
}

/// Reads CSV data from any reader, e.g. an uploaded byte buffer.
pub fn read_csv_reader<R: Read>(reader: R, origin: &str) -> Result<RawTable> {
    let start = Instant::now();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }
    debug!(origin, records = records.len(), "csv records read");

    let table = RawTable::from_records(origin, records);
    if table.is_empty() {
        return Err(IngestError::EmptyCsv {
            origin: origin.to_string(),
        });
    }
    info!(
        origin,
        columns = table.width(),
        rows = table.height(),
        duration_ms = start.elapsed().as_millis(),
        "csv loaded"
    );
    Ok(table)
}
