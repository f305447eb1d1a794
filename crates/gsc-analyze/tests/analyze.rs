//! End-to-end pipeline tests over in-memory tables.

use gsc_analyze::{ALL_CLEAR, analyze, analyze_workbook};
use gsc_ingest::{RawTable, Workbook, read_csv_reader};
use gsc_model::{
    AnalysisOptions, CtrScale, CtrScalePolicy, EntityKind, IngestWarning, RowFilter, Sections,
};

const QUERIES_CSV: &str = "\
Top queries,Clicks,Impressions,CTR,Position
rust csv parser,9,\"4,200\",0.29%,7.4
serde json,150,\"2,000\",7.5%,3.1
polars dataframe,4,300,1.33%,12
tokio tutorial,30,200,15%,14.2
borrow checker,,n/a,,
";

fn queries() -> RawTable {
    read_csv_reader(QUERIES_CSV.as_bytes(), "Queries.csv").unwrap()
}

fn ids(rows: &[gsc_model::MetricRow]) -> Vec<&str> {
    rows.iter().map(|r| r.identifier.as_str()).collect()
}

#[test]
fn full_pipeline_over_query_export() {
    let result = analyze(&queries(), None, &AnalysisOptions::default()).unwrap();

    assert_eq!(result.entity, EntityKind::Query);
    assert_eq!(result.source, "Queries.csv");
    assert_eq!(result.ctr_scale, CtrScale::Percent);
    assert_eq!(result.coercion.source_rows, 5);
    assert_eq!(result.coercion.dropped_rows, 1);
    assert_eq!(result.coercion.unparsable_cells, 1);

    assert_eq!(result.overall.row_count, 4);
    assert_eq!(result.overall.total_clicks, 193.0);
    assert_eq!(result.overall.total_impressions, 6700.0);
    assert_eq!(result.kpis, result.overall);

    assert_eq!(
        ids(&result.top_rows),
        vec!["serde json", "tokio tutorial", "rust csv parser", "polars dataframe"]
    );
    assert_eq!(
        ids(&result.classification.opportunities),
        vec!["rust csv parser", "polars dataframe"]
    );
    assert_eq!(ids(&result.classification.critical), vec!["rust csv parser"]);
    assert_eq!(ids(&result.classification.warnings), vec!["rust csv parser"]);
    assert_eq!(ids(&result.classification.wins), vec!["tokio tutorial"]);
    assert_eq!(result.recommendations.len(), 4);
}

#[test]
fn filters_only_affect_kpis_and_top_rows() {
    let options = AnalysisOptions::default()
        .with_filter(RowFilter::new().with_min_impressions(1000.0).with_search("S"));
    let result = analyze(&queries(), None, &options).unwrap();

    assert_eq!(result.kpis.row_count, 2);
    assert_eq!(ids(&result.top_rows), vec!["serde json", "rust csv parser"]);
    assert_eq!(result.overall.row_count, 4);
    assert_eq!(result.classification.opportunities.len(), 2);
    assert_eq!(result.classification.wins.len(), 1);
}

#[test]
fn disabled_sections_are_empty() {
    let options = AnalysisOptions::default()
        .with_filter(RowFilter::new().with_min_impressions(1000.0))
        .with_sections(Sections {
            alerts: false,
            insights: false,
            filters: false,
        });
    let result = analyze(&queries(), None, &options).unwrap();

    assert_eq!(result.kpis.row_count, 4);
    assert_eq!(result.classification.opportunities.len(), 2);
    assert_eq!(result.classification.alert_count(), 0);
    assert!(result.recommendations.is_empty());
}

#[test]
fn fractional_ctr_is_rescaled_before_classification() {
    let csv = "\
Query,Clicks,Impressions,CTR,Position
alpha,3,1500,0.002,6
beta,40,800,0.05,2
";
    let table = read_csv_reader(csv.as_bytes(), "fractions.csv").unwrap();
    let result = analyze(&table, None, &AnalysisOptions::default()).unwrap();

    assert_eq!(result.ctr_scale, CtrScale::Fraction);
    assert_eq!(ids(&result.classification.opportunities), vec!["alpha"]);
    assert_eq!(ids(&result.classification.critical), vec!["alpha"]);
    assert_eq!(ids(&result.classification.warnings), vec!["alpha"]);

    let kept = AnalysisOptions::default().with_ctr_scale(CtrScalePolicy::disabled());
    let result = analyze(&table, None, &kept).unwrap();
    assert_eq!(result.ctr_scale, CtrScale::Percent);
    assert_eq!(result.classification.opportunities.len(), 1);
    assert_eq!(result.classification.critical.len(), 1);
}

#[test]
fn country_rows_rank_by_impressions() {
    let csv = "\
Country,Clicks,Impressions,CTR,Position
Germany,50,900,5.56%,4
India,10,5000,0.2%,9
";
    let table = read_csv_reader(csv.as_bytes(), "Countries.csv").unwrap();
    let result = analyze(&table, None, &AnalysisOptions::default()).unwrap();

    assert_eq!(result.entity, EntityKind::Country);
    assert_eq!(ids(&result.top_rows), vec!["India", "Germany"]);
}

#[test]
fn missing_columns_fail_before_analysis() {
    let csv = "Query,Clicks\nrust,3\n";
    let table = read_csv_reader(csv.as_bytes(), "Queries.csv").unwrap();
    let err = analyze(&table, None, &AnalysisOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Queries.csv is missing required columns: impressions, ctr, position"
    );
}

#[test]
fn quiet_export_gets_fallback_recommendation() {
    let csv = "Query,Clicks,Impressions,CTR,Position\nrust,40,400,10%,2\n";
    let table = read_csv_reader(csv.as_bytes(), "Queries.csv").unwrap();
    let result = analyze(&table, None, &AnalysisOptions::default()).unwrap();
    assert_eq!(result.recommendations, vec![ALL_CLEAR.to_string()]);
}

#[test]
fn recommendation_text() {
    let result = analyze(&queries(), None, &AnalysisOptions::default()).unwrap();
    insta::assert_snapshot!(result.recommendations.join("\n"), @r"
    2 keywords rank between position 5 and 15 with CTR below 5%. Rewrite titles and meta descriptions to win more clicks.
    1 keyword has more than 1000 impressions but CTR below 1%. Check search intent and snippet relevance first.
    1 keyword gets more than 1000 impressions but fewer than 10 clicks. Visibility is growing faster than traffic.
    1 keyword earns CTR above 10% despite ranking below position 10. Improving rankings here should pay off quickly.
    ");
}

#[test]
fn workbook_sections_and_warnings() {
    let good = read_csv_reader(
        "Top pages,Clicks,Impressions,CTR,Position\nhttps://example.com/,10,100,10%,3\n".as_bytes(),
        "Pages",
    )
    .unwrap();
    let broken = read_csv_reader("Country,Clicks\nFrance,3\n".as_bytes(), "Countries").unwrap();
    let workbook = Workbook {
        sheets: vec![(EntityKind::Page, good), (EntityKind::Country, broken)],
        warnings: vec![IngestWarning::MissingSheet {
            sheet: "Queries".to_string(),
        }],
    };

    let analysis = analyze_workbook(&workbook, &AnalysisOptions::default());

    assert_eq!(analysis.sections.len(), 1);
    assert!(analysis.section(EntityKind::Page).is_some());
    assert!(analysis.section(EntityKind::Country).is_none());
    assert_eq!(
        analysis.warnings,
        vec![
            IngestWarning::MissingSheet {
                sheet: "Queries".to_string()
            },
            IngestWarning::SheetMissingColumns {
                sheet: "Countries".to_string(),
                columns: vec![
                    "impressions".to_string(),
                    "ctr".to_string(),
                    "position".to_string()
                ],
            },
        ]
    );
}
