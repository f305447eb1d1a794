//! Output for Search Console analyses.
//!
//! - [`export_opportunities`] writes the opportunity bucket as CSV with the
//!   source's columns
//! - [`write_json_report`] serializes full results
//! - [`format`] renders KPI numbers for display

pub mod error;
pub mod export;
pub mod format;
pub mod json;

pub use error::{ReportError, Result};
pub use export::{OPPORTUNITIES_FILE_NAME, ensure_parent_dir, export_opportunities, write_rows_csv};
pub use format::{
    format_count, format_ctr_cell, format_metric, format_optional, format_percent, format_position,
};
pub use json::{JsonReport, write_json, write_json_report};
