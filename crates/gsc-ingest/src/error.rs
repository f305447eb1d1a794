//! Error types for export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File extension is not a supported export format.
    #[error("unsupported input format for {path}: expected .csv, .xlsx, .xls or .ods")]
    UnsupportedFormat { path: PathBuf },

    /// Text encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}; re-export the file as UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// CSV reader rejected the input.
    #[error("failed to parse CSV {origin}: {message}")]
    CsvParse { origin: String, message: String },

    /// CSV input has no header row.
    #[error("CSV input is empty: {origin}")]
    EmptyCsv { origin: String },

    // === Workbook Errors ===
    /// Workbook could not be opened or a sheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn open_failed(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/exports/Queries.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /exports/Queries.csv");
    }

    #[test]
    fn test_open_failed_maps_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::open_failed(std::path::Path::new("a.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IngestError::open_failed(std::path::Path::new("a.csv"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
