//! Aggregation, ranking and classification of Search Console rows.
//!
//! [`analyze`] is the single entry point for a table; [`analyze_workbook`]
//! runs it once per sheet. Optional parts of the output are switched with
//! [`gsc_model::Sections`].

pub mod aggregate;
pub mod classify;
pub mod filter;
pub mod insights;
pub mod pipeline;
pub mod rank;

pub use aggregate::aggregate;
pub use classify::{classify, is_critical, is_impression_surge, is_opportunity, is_win};
pub use filter::{filter_rows, matches_filter};
pub use insights::{ALL_CLEAR, recommendations, recommendations_for_counts};
pub use pipeline::{analyze, analyze_rows, analyze_workbook};
pub use rank::{compare_desc, sort_desc, top_n};
