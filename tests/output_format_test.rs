//! Tests for report output formats.
//!
//! These tests pin the text and warning line layouts and verify that the
//! JSON form decodes back into the same report.

use std::path::PathBuf;

use swift_doc_coverage::{
    Coverage, CoverageReport, Discovery, ReportFormat, Reporter, Visibility,
};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn rect_report() -> CoverageReport {
    let coverage = Coverage::new(&[testdata_path().join("Rect")], &Discovery::new())
        .expect("should parse fixtures");
    coverage.report(Visibility::Public).expect("should report")
}

#[test]
fn test_coverage_format() {
    let report = rect_report();
    let rect_path = &report.sources[1].path;
    let text = Reporter::new(ReportFormat::Coverage).render(&report).unwrap();

    let expected = format!(
        "1) {}: 50% [1/2]\nRect.swift:14:3: var Rect.center\n\nTotal: 50% [1/2]\n",
        rect_path
    );
    assert_eq!(text, expected);
}

#[test]
fn test_coverage_format_indexes_non_empty_sources() {
    let coverage = Coverage::new(&[testdata_path()], &Discovery::new()).unwrap();
    let report = coverage.report(Visibility::Internal).unwrap();
    let text = Reporter::new(ReportFormat::Coverage).render(&report).unwrap();

    let headers: Vec<&str> = text
        .lines()
        .filter(|l| l.contains(".swift: "))
        .collect();
    assert_eq!(headers.len(), 4);
    assert!(headers[0].starts_with("1) ") && headers[0].contains("AlternativeRect.swift: "));
    assert!(headers[1].starts_with("2) ") && headers[1].contains("/Rect.swift: "));
    assert!(headers[2].starts_with("3) ") && headers[2].contains("Book.swift: "));
    assert!(headers[3].starts_with("4) ") && headers[3].contains("User.swift: "));
    assert!(text.ends_with(&format!(
        "\nTotal: {}% [{}/{}]\n",
        report.coverage(),
        report.documented_count(),
        report.total_count()
    )));
}

#[test]
fn test_warnings_format() {
    let report = rect_report();
    let rect_path = &report.sources[1].path;
    let text = Reporter::new(ReportFormat::Warnings).render(&report).unwrap();

    assert_eq!(
        text,
        format!(
            "{}:14:3: warning: No documentation for 'var Rect.center'.\n",
            rect_path
        )
    );
}

#[test]
fn test_json_round_trip() {
    let coverage = Coverage::new(&[testdata_path()], &Discovery::new()).unwrap();
    let report = coverage.report(Visibility::Private).unwrap();
    let text = Reporter::new(ReportFormat::Json).render(&report).unwrap();

    assert!(text.contains("\"totalCount\""));
    assert!(!text.contains("total_count"));

    let decoded: CoverageReport = serde_json::from_str(&text).expect("should decode");
    assert_eq!(decoded, report);
    assert_eq!(decoded.total_count(), report.total_count());
}
