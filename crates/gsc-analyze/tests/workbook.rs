//! Workbook exports read from a real `.xlsx` file.
//!
//! The workbook is assembled with `zip` at test time: numbers are stored as
//! numeric cells, so CTR arrives as a float fraction like `0.045`.

use std::io::Write;
use std::path::{Path, PathBuf};

use gsc_analyze::analyze_workbook;
use gsc_ingest::read_workbook;
use gsc_model::{AnalysisOptions, CtrScale, EntityKind, IngestWarning, MetricRow};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
<Override PartName="/xl/worksheets/sheet2.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/>
</Relationships>"#;

#[derive(Clone, Copy)]
enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

use Cell::{Number, Text};

const HEADERS: [&str; 4] = ["Clicks", "Impressions", "CTR", "Position"];

fn column_letter(index: usize) -> char {
    char::from(b'A' + u8::try_from(index).unwrap())
}

fn sheet_xml(rows: &[Vec<Cell<'_>>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (r, row) in rows.iter().enumerate() {
        let number = r + 1;
        xml.push_str(&format!(r#"<row r="{number}">"#));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{number}", column_letter(c));
            match cell {
                Text(value) => xml.push_str(&format!(
                    r#"<c r="{reference}" t="inlineStr"><is><t>{value}</t></is></c>"#
                )),
                Number(value) => {
                    xml.push_str(&format!(r#"<c r="{reference}"><v>{value}</v></c>"#));
                }
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn sheet(identifier: &'static str, rows: &[(&'static str, f64, f64, f64, f64)]) -> String {
    let mut cells = vec![
        std::iter::once(Text(identifier))
            .chain(HEADERS.iter().map(|header| Text(*header)))
            .collect::<Vec<_>>(),
    ];
    for (name, clicks, impressions, ctr, position) in rows {
        cells.push(vec![
            Text(*name),
            Number(*clicks),
            Number(*impressions),
            Number(*ctr),
            Number(*position),
        ]);
    }
    sheet_xml(&cells)
}

/// Writes a workbook with a lower-case `queries` sheet and a `Countries`
/// sheet; there is no `Pages` sheet.
fn write_xlsx(dir: &Path) -> PathBuf {
    let workbook_xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets>
<sheet name="queries" sheetId="1" r:id="rId1"/>
<sheet name="Countries" sheetId="2" r:id="rId2"/>
</sheets>
</workbook>"#;
    let queries = sheet(
        "Query",
        &[
            ("rust csv parser", 9.0, 4200.0, 0.0029, 7.4),
            ("serde json", 150.0, 2000.0, 0.075, 3.1),
            ("polars dataframe", 4.0, 300.0, 0.0133, 12.0),
        ],
    );
    let countries = sheet(
        "Country",
        &[
            ("usa", 120.0, 3000.0, 0.04, 6.5),
            ("deu", 40.0, 900.0, 0.045, 9.0),
        ],
    );

    let mut buffer = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(&mut buffer));
        for (name, contents) in [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", ROOT_RELS),
            ("xl/workbook.xml", workbook_xml),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/worksheets/sheet1.xml", queries.as_str()),
            ("xl/worksheets/sheet2.xml", countries.as_str()),
        ] {
            let options = zip::write::SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            zip.start_file(name, options).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    let path = dir.join("search-console.xlsx");
    std::fs::write(&path, buffer).unwrap();
    path
}

fn ids(rows: &[MetricRow]) -> Vec<&str> {
    rows.iter().map(|r| r.identifier.as_str()).collect()
}

fn ctrs(rows: &[MetricRow]) -> Vec<f64> {
    rows.iter().map(|r| r.ctr.unwrap()).collect()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}

#[test]
fn reads_sheets_by_case_insensitive_name() {
    let dir = tempfile::tempdir().unwrap();
    let workbook = read_workbook(&write_xlsx(dir.path())).unwrap();

    let kinds: Vec<EntityKind> = workbook.sheets.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, vec![EntityKind::Query, EntityKind::Country]);
    assert_eq!(
        workbook.warnings,
        vec![IngestWarning::MissingSheet {
            sheet: "Pages".to_string()
        }]
    );

    let (_, queries) = &workbook.sheets[0];
    assert_eq!(queries.origin, "queries");
    assert_eq!(queries.headers, vec!["Query", "Clicks", "Impressions", "CTR", "Position"]);
    assert_eq!(queries.rows[0], vec!["rust csv parser", "9", "4200", "0.0029", "7.4"]);

    let (_, countries) = &workbook.sheets[1];
    assert_eq!(countries.origin, "Countries");
    assert_eq!(countries.rows[1][3], "0.045");
}

#[test]
fn float_ctr_cells_are_rescaled_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let workbook = read_workbook(&write_xlsx(dir.path())).unwrap();

    let analysis = analyze_workbook(&workbook, &AnalysisOptions::default());

    assert_eq!(analysis.sections.len(), 2);
    assert_eq!(
        analysis.warnings,
        vec![IngestWarning::MissingSheet {
            sheet: "Pages".to_string()
        }]
    );

    let queries = analysis.section(EntityKind::Query).unwrap();
    assert_eq!(queries.source, "queries");
    assert_eq!(queries.ctr_scale, CtrScale::Fraction);
    assert_eq!(
        ids(&queries.classification.opportunities),
        vec!["rust csv parser", "polars dataframe"]
    );
    assert_close(&ctrs(&queries.classification.opportunities), &[0.29, 1.33]);
    assert_eq!(ids(&queries.classification.critical), vec!["rust csv parser"]);

    let countries = analysis.section(EntityKind::Country).unwrap();
    assert_eq!(countries.ctr_scale, CtrScale::Fraction);
    assert_eq!(ids(&countries.top_rows), vec!["usa", "deu"]);
    assert_close(&ctrs(&countries.top_rows), &[4.0, 4.5]);
    assert_eq!(ids(&countries.classification.opportunities), vec!["usa", "deu"]);
}
