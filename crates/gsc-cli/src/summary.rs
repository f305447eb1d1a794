use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use gsc_model::{AnalysisResult, CtrScale, EntityKind, MetricRow, Thresholds};
use gsc_report::{format_count, format_optional, format_percent, format_position};

use crate::types::AnalyzeRun;

/// Rows shown per bucket table; the rest are summarized in one line.
const MAX_LISTED_ROWS: usize = 25;

pub fn print_summary(run: &AnalyzeRun) {
    let analysis = &run.analysis;
    for (index, section) in analysis.sections.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_section(section, &run.thresholds);
    }
    if !analysis.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &analysis.warnings {
            println!("  - {warning}");
        }
    }
}

fn print_section(result: &AnalysisResult, thresholds: &Thresholds) {
    println!("Source: {} ({})", result.source, result.entity);
    if result.ctr_scale == CtrScale::Fraction {
        println!("CTR column read as fractions and converted to percent.");
    }
    if result.coercion.dropped_rows > 0 || result.coercion.unparsable_cells > 0 {
        println!(
            "Rows read: {}, dropped without metrics: {}, unparsable cells: {}",
            result.coercion.source_rows, result.coercion.dropped_rows, result.coercion.unparsable_cells
        );
    }

    println!("{}", kpi_table(result));

    if !result.top_rows.is_empty() {
        println!(
            "Top {} {} by {}",
            result.top_rows.len(),
            plural(result.entity),
            result.entity.ranking_field()
        );
        println!("{}", rows_table(result.entity, &result.top_rows));
    }

    let classification = &result.classification;
    println!(
        "Opportunities (position {}-{}, CTR < {}%): {}",
        thresholds.opportunity_position_min,
        thresholds.opportunity_position_max,
        thresholds.opportunity_ctr_max,
        classification.opportunities.len()
    );
    if !classification.opportunities.is_empty() {
        println!("{}", rows_table(result.entity, &classification.opportunities));
        print_remaining(classification.opportunities.len());
    }

    if classification.alert_count() > 0 {
        println!("{}", alerts_table(result));
        for (label, rows) in [
            ("Critical", &classification.critical),
            ("Warning", &classification.warnings),
            ("Win", &classification.wins),
        ] {
            if rows.is_empty() {
                continue;
            }
            println!("{label}:");
            println!("{}", rows_table(result.entity, rows));
            print_remaining(rows.len());
        }
    }

    if !result.recommendations.is_empty() {
        println!("Recommendations:");
        for line in &result.recommendations {
            println!("  - {line}");
        }
    }
}

fn kpi_table(result: &AnalysisResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Clicks"),
        header_cell("Impressions"),
        header_cell("CTR"),
        header_cell("Avg. position"),
    ]);
    apply_summary_table_style(&mut table);
    let kpis = &result.kpis;
    let rows_label = if kpis.row_count == result.overall.row_count {
        format_count(kpis.row_count as f64)
    } else {
        format!(
            "{} of {}",
            format_count(kpis.row_count as f64),
            format_count(result.overall.row_count as f64)
        )
    };
    table.add_row(vec![
        Cell::new(rows_label),
        Cell::new(format_count(kpis.total_clicks)).add_attribute(Attribute::Bold),
        Cell::new(format_count(kpis.total_impressions)).add_attribute(Attribute::Bold),
        Cell::new(format_percent(kpis.weighted_ctr)),
        Cell::new(format_position(kpis.weighted_position)),
    ]);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

fn rows_table(entity: EntityKind, rows: &[MetricRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(title_case(entity.field_name()).as_str()),
        header_cell("Clicks"),
        header_cell("Impressions"),
        header_cell("CTR"),
        header_cell("Position"),
    ]);
    apply_table_style(&mut table);
    for row in rows.iter().take(MAX_LISTED_ROWS) {
        table.add_row(vec![
            Cell::new(&row.identifier),
            metric_cell(format_optional(row.clicks, format_count)),
            metric_cell(format_optional(row.impressions, format_count)),
            metric_cell(format_optional(row.ctr, format_percent)),
            metric_cell(format_optional(row.position, format_position)),
        ]);
    }
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

fn alerts_table(result: &AnalysisResult) -> Table {
    let counts = result.classification.counts();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Critical"),
        header_cell("Warning"),
        header_cell("Win"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        count_cell(counts.critical, Color::Red),
        count_cell(counts.warnings, Color::Yellow),
        count_cell(counts.wins, Color::Green),
    ]);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

fn print_remaining(total: usize) {
    if total > MAX_LISTED_ROWS {
        println!("  ... and {} more", total - MAX_LISTED_ROWS);
    }
}

fn plural(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Query => "queries",
        EntityKind::Page => "pages",
        EntityKind::Country => "countries",
    }
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn metric_cell(value: String) -> Cell {
    if value == "-" {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(13)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
