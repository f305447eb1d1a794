use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::{info, warn};

use gsc_cli::{export_section, load_config, run_analysis};
use gsc_model::{AnalysisOptions, Thresholds};
use gsc_report::{JsonReport, export_opportunities, write_json_report};

use crate::cli::AnalyzeArgs;
use crate::summary::{apply_table_style, header_cell};
use crate::types::AnalyzeRun;

fn resolve_options(args: &AnalyzeArgs, config: Option<&Path>) -> Result<AnalysisOptions> {
    let options = load_config(config)?;
    Ok(args.options.overrides().apply(options))
}

pub fn run_analyze(args: &AnalyzeArgs, config: Option<&Path>) -> Result<AnalyzeRun> {
    let options = resolve_options(args, config)?;
    let analysis = run_analysis(&args.input, args.entity, &options)?;

    if let Some(path) = &args.export_opportunities {
        match export_section(&analysis) {
            Some(section) => {
                export_opportunities(path, section)
                    .with_context(|| format!("export opportunities to {}", path.display()))?;
                info!(path = %path.display(), entity = %section.entity, "opportunities written");
            }
            None => warn!("no section to export opportunities from"),
        }
    }
    if let Some(path) = &args.json {
        write_json_report(path, &JsonReport::workbook(&analysis))
            .with_context(|| format!("write json report to {}", path.display()))?;
    }
    Ok(AnalyzeRun {
        analysis,
        thresholds: options.thresholds,
    })
}

pub fn run_thresholds(config: Option<&Path>) -> Result<()> {
    let options = load_config(config)?;
    println!("{}", thresholds_table(&options.thresholds));
    Ok(())
}

fn thresholds_table(thresholds: &Thresholds) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Bucket"), header_cell("Rule")]);
    apply_table_style(&mut table);
    let surge_ctr = if thresholds.surge_requires_low_ctr {
        format!(" and CTR < {}%", thresholds.surge_ctr_max)
    } else {
        String::new()
    };
    let rows = [
        (
            "Opportunity",
            format!(
                "{} <= position <= {} and CTR < {}%",
                thresholds.opportunity_position_min,
                thresholds.opportunity_position_max,
                thresholds.opportunity_ctr_max
            ),
        ),
        (
            "Critical",
            format!(
                "impressions > {} and CTR < {}%",
                thresholds.critical_impressions_min, thresholds.critical_ctr_max
            ),
        ),
        (
            "Warning",
            format!(
                "impressions > {} and clicks < {}{surge_ctr}",
                thresholds.surge_impressions_min, thresholds.surge_clicks_max
            ),
        ),
        (
            "Win",
            format!(
                "CTR > {}% and position > {}",
                thresholds.win_ctr_min, thresholds.win_position_min
            ),
        ),
    ];
    for (bucket, rule) in rows {
        table.add_row(vec![Cell::new(bucket), Cell::new(rule)]);
    }
    table
}
