//! Error types for schema mapping.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Required columns are absent after header normalization.
    #[error("{origin} is missing required columns: {}", columns.join(", "))]
    MissingColumns { origin: String, columns: Vec<String> },
}

pub type Result<T> = std::result::Result<T, TransformError>;
