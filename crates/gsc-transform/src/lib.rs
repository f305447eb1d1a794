//! Schema mapping and numeric normalization for Search Console exports.
//!
//! Turns a [`gsc_ingest::RawTable`] into a typed [`gsc_model::RowSet`]:
//! headers are resolved against an explicit [`ColumnSchema`], cells are
//! coerced to numbers and the CTR column is brought to percent.

pub mod error;
pub mod normalization;
pub mod rows;
pub mod schema;

pub use error::{Result, TransformError};
pub use normalization::{
    coerce, coerce_ctr, detect_ctr_scale, has_percent_sign, max_ctr, normalize_ctr_scale,
};
pub use rows::{LoadedRows, build_row_set, resolve_entity};
pub use schema::{ColumnSchema, detect_entity};
