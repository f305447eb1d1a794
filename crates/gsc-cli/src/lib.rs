//! Library side of the `gsc` command: logging, configuration and the
//! file-level pipeline.

pub mod config;
pub mod logging;
pub mod pipeline;

pub use config::{OptionOverrides, load_config, parse_config};
pub use pipeline::{export_section, run_analysis};
