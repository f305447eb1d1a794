//! CLI argument definitions for the Search Console dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use gsc_cli::OptionOverrides;
use gsc_model::EntityKind;
use gsc_report::OPPORTUNITIES_FILE_NAME;

#[derive(Parser)]
#[command(
    name = "gsc",
    version,
    about = "Search Console performance dashboard - KPIs, opportunities and alerts",
    long_about = "Analyze Google Search Console performance exports.\n\n\
                  Reads a Queries/Pages/Countries CSV or the full XLSX export, \
                  prints impression-weighted KPIs, opportunity keywords and alerts, \
                  and can export the opportunities as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow query and page text in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML file with thresholds, filters and section switches.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a Search Console export and print the dashboard.
    Analyze(AnalyzeArgs),

    /// Print the active classification thresholds.
    Thresholds,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// CSV export (Queries.csv, Pages.csv, Countries.csv) or XLSX/ODS workbook.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Entity the CSV holds: query, page or country (detected from the headers when omitted).
    #[arg(long = "entity", value_name = "KIND")]
    pub entity: Option<EntityKind>,

    /// Write the opportunity rows as CSV.
    #[arg(
        long = "export-opportunities",
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = OPPORTUNITIES_FILE_NAME
    )]
    pub export_opportunities: Option<PathBuf>,

    /// Write the full analysis as JSON.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Overrides for values from `--config`.
#[derive(Args)]
pub struct OptionArgs {
    /// Only rows with at least this many impressions count toward KPIs and top rows.
    #[arg(long = "min-impressions", value_name = "N", value_parser = parse_finite)]
    pub min_impressions: Option<f64>,

    /// Case-insensitive substring filter on the query, page or country.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Number of top rows to show.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Read the CTR column as fractions when its maximum is at most this value.
    #[arg(long = "ctr-fraction-max", value_name = "VALUE", value_parser = parse_finite)]
    pub ctr_fraction_max: Option<f64>,

    /// Never rescale the CTR column.
    #[arg(long = "no-ctr-rescale")]
    pub no_ctr_rescale: bool,

    /// Only flag impression surges whose CTR is also low.
    #[arg(long = "surge-requires-low-ctr")]
    pub surge_requires_low_ctr: bool,

    /// Skip critical, warning and win alerts.
    #[arg(long = "no-alerts")]
    pub no_alerts: bool,

    /// Skip recommendation text.
    #[arg(long = "no-insights")]
    pub no_insights: bool,

    /// Ignore --min-impressions and --search.
    #[arg(long = "no-filters")]
    pub no_filters: bool,
}

impl OptionArgs {
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            min_impressions: self.min_impressions,
            search: self.search.clone(),
            top_n: self.top,
            ctr_fraction_max: self.ctr_fraction_max,
            no_ctr_rescale: self.no_ctr_rescale,
            surge_requires_low_ctr: self.surge_requires_low_ctr,
            no_alerts: self.no_alerts,
            no_insights: self.no_insights,
            no_filters: self.no_filters,
        }
    }
}

/// Parse a threshold, rejecting NaN and infinities.
fn parse_finite(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(format!("'{value}' must be a finite number"))
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
