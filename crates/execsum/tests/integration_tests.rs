//! Integration tests for the executive summary core.
//!
//! These tests verify end-to-end behavior over fixture CSV files: loading
//! with encoding detection, summarization, question answering, and report
//! assembly.

use std::io::Cursor;
use std::path::PathBuf;

use execsum::answer::RuleBasedAnswerer;
use execsum::{summarize, CellValue, ReportGenerator, Table, TableLoader};
use pretty_assertions::assert_eq;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(filename: &str) -> Table {
    TableLoader::new()
        .load_path(fixtures_path().join(filename))
        .expect("Failed to load fixture CSV")
}

fn answer(question: &str, table: &Table) -> String {
    RuleBasedAnswerer::new().answer_question(question, table)
}

// ============================================================================
// Loading Tests
// ============================================================================

#[test]
fn test_load_stock_prices_shape_and_types() {
    let table = load_fixture("stock_prices.csv");

    assert_eq!(table.shape(), (6, 6));
    assert_eq!(
        table.column_names(),
        &["Date", "Open", "High", "Low", "Close", "Volume"]
    );

    // conservative whole-column inference
    assert_eq!(
        table.column("Date").unwrap()[0],
        CellValue::Str("2024-01-02".to_string())
    );
    assert_eq!(table.column("Close").unwrap()[0], CellValue::Float(11.0));
    assert_eq!(table.column("Volume").unwrap()[0], CellValue::Int(1000));

    // empty field and NA marker both load as missing
    assert_eq!(table.column("Open").unwrap()[4], CellValue::Missing);
    assert_eq!(table.column("Volume").unwrap()[4], CellValue::Missing);
}

#[test]
fn test_load_is_reproducible() {
    let loader = TableLoader::new();
    let path = fixtures_path().join("stock_prices.csv");

    let first = loader.load_path(&path).unwrap();
    let second = loader.load_path(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_load_latin1_fixture() {
    let table = load_fixture("latin1_sales.csv");

    assert_eq!(table.shape(), (3, 2));
    assert_eq!(table.column_names(), &["Ville", "Ventes"]);
    assert_eq!(
        table.column("Ville").unwrap()[0],
        CellValue::Str("Orléans".to_string())
    );
    assert_eq!(table.column("Ventes").unwrap()[2], CellValue::Int(95));
}

#[test]
fn test_load_reader_restores_stream_position() {
    let bytes = std::fs::read(fixtures_path().join("stock_prices.csv")).unwrap();
    let mut cursor = Cursor::new(bytes);

    let loader = TableLoader::new();
    let first = loader.load_reader(&mut cursor).unwrap();
    assert_eq!(cursor.position(), 0);

    // a second independent load observes identical bytes
    let second = loader.load_reader(&mut cursor).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_load_structurally_invalid_csv_fails() {
    let err = TableLoader::new()
        .load_bytes(b"a,b,c\n1,2,3\n4,5\n")
        .unwrap_err();
    assert_eq!(err.error_code(), "PARSE_ERROR");
    // the underlying cause is surfaced, not swallowed
    assert!(err.to_string().contains("Failed to parse CSV"));
}

// ============================================================================
// Question Answering Tests
// ============================================================================

#[test]
fn test_answers_over_fixture_data() {
    let table = load_fixture("stock_prices.csv");

    assert_eq!(
        answer("What is the average closing price?", &table),
        "The average closing price is 12.83"
    );
    assert_eq!(
        answer("Show highest price", &table),
        "The highest price recorded is 15.00"
    );
    assert_eq!(
        answer("what was the lowest price?", &table),
        "The lowest price recorded is 9.00"
    );
    // volume mean skips the NA row
    assert_eq!(
        answer("How large is the trading volume?", &table),
        "The average trading volume is 1080.00"
    );
}

#[test]
fn test_answer_correlation_exact() {
    let table = Table::from_columns(vec![
        (
            "Open",
            vec![CellValue::Int(1), CellValue::Int(2), CellValue::Int(3)],
        ),
        (
            "Close",
            vec![CellValue::Int(1), CellValue::Int(2), CellValue::Int(3)],
        ),
    ]);
    assert_eq!(
        answer("correlation between open and close price", &table),
        "The correlation between opening and closing prices is 1.000"
    );
}

#[test]
fn test_answer_unrecognized_question() {
    let table = load_fixture("stock_prices.csv");
    assert_eq!(
        answer("what is the weather", &table),
        "Answer not available for this question."
    );
}

#[test]
fn test_answer_missing_column_is_diagnostic_not_panic() {
    let table = load_fixture("latin1_sales.csv");
    assert_eq!(
        answer("average closing price", &table),
        "Unable to compute this question — column may not exist."
    );
}

#[test]
fn test_trend_pattern_outranks_correlation() {
    let table = load_fixture("stock_prices.csv");
    assert_eq!(
        answer("price trend or price correlation?", &table),
        "Trend analysis can be visualized through a line chart showing closing prices over time."
    );
}

// ============================================================================
// Column Existence Tests
// ============================================================================

#[test]
fn test_column_exists_is_exact_and_case_sensitive() {
    let table = load_fixture("stock_prices.csv");

    assert!(table.has_column("Volume"));
    assert!(!table.has_column("volume"));
    assert!(!table.has_column("VOLUME"));
    assert!(!table.has_column("Vol"));
}

// ============================================================================
// Summary Tests
// ============================================================================

#[test]
fn test_summary_over_fixture() {
    let table = load_fixture("stock_prices.csv");
    let summary = summarize(&table);

    assert_eq!(summary.shape, (6, 6));
    assert_eq!(summary.missing_total, 2);
    assert_eq!(summary.duplicate_rows, 1);
    assert_eq!(summary.head.len(), 5);

    // Date is a string column, the other five are numeric
    let metric_names: Vec<&str> = summary.metrics.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(metric_names, vec!["Open", "High", "Low", "Close", "Volume"]);

    let volume = summary.metrics.iter().find(|m| m.name == "Volume").unwrap();
    assert_eq!(volume.count, 5);
    assert!((volume.mean - 1080.0).abs() < 1e-12);
    assert_eq!(volume.min, 900.0);
    assert_eq!(volume.max, 1500.0);
}

// ============================================================================
// Report Tests
// ============================================================================

#[test]
fn test_report_format_over_fixture() {
    let table = load_fixture("stock_prices.csv");
    let questions = vec![
        "What is the average closing price?".to_string(),
        String::new(),
        "Show highest price".to_string(),
        "what is the weather".to_string(),
    ];

    let report = ReportGenerator::default()
        .build_report(
            "Data Analysis Summary Report",
            &questions,
            &RuleBasedAnswerer::new(),
            &table,
        )
        .unwrap();

    assert_eq!(
        report,
        "Title: Data Analysis Summary Report\n\n\
         Q: What is the average closing price?\nA: The average closing price is 12.83\n\n\
         Q: Show highest price\nA: The highest price recorded is 15.00\n\n\
         Q: what is the weather\nA: Answer not available for this question.\n\n"
    );
}

#[test]
fn test_report_written_to_disk() {
    let table = load_fixture("stock_prices.csv");
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(dir.path().to_path_buf(), None);

    let questions = vec!["Show highest price".to_string()];
    let report = generator
        .build_report("Prices", &questions, &RuleBasedAnswerer::new(), &table)
        .unwrap();
    let path = generator.write_report_to_file(&report).unwrap();

    assert_eq!(path, dir.path().join("executive_summary.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), report);
}
