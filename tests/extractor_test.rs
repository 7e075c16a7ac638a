//! Integration tests for table extraction and row cleaning

#[path = "common/mod.rs"]
mod common;

use common::*;
use rrd_cli::cleaner::clean_rows;
use rrd_cli::constants::{COLUMN_COUNT, EXPECTED_COLUMNS};
use rrd_cli::errors::AppError;
use rrd_cli::extractor::extract_table_rows;

#[test]
fn test_extract_sample_page_row_shapes() {
    let rows = extract_table_rows(SAMPLE_RESULTS_HTML).unwrap();

    // Two title rows, header, two data rows, repeated header, one data row
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0], vec!["Finishers: 3"]);
    assert_eq!(rows[1], vec!["Women's Race"]);
    assert_eq!(rows[2].len(), COLUMN_COUNT);
    assert_eq!(rows[2], EXPECTED_COLUMNS);
}

#[test]
fn test_extract_no_table_errors() {
    let err = extract_table_rows(NO_TABLE_HTML).unwrap_err();
    assert!(matches!(err, AppError::StructureError(_)));
}

#[test]
fn test_clean_sample_page_drops_titles_and_repeated_header() {
    let rows = extract_table_rows(SAMPLE_RESULTS_HTML).unwrap();
    let (header, data) = clean_rows(rows).unwrap();

    assert_eq!(header, EXPECTED_COLUMNS);
    assert_eq!(data.len(), 3);

    // Nothing shorter than the header and nothing equal to it survives
    assert!(data.iter().all(|row| row.len() == COLUMN_COUNT));
    assert!(data.iter().all(|row| *row != header));

    let names: Vec<&str> = data.iter().map(|row| row[1].as_str()).collect();
    assert_eq!(
        names,
        vec!["Alexandra Sciocchetti", "Tamma Carleton", "Hana Rowe"]
    );
}

#[test]
fn test_clean_titles_only_page_errors() {
    let rows = extract_table_rows(TITLES_ONLY_HTML).unwrap();
    let err = clean_rows(rows).unwrap_err();
    assert!(matches!(err, AppError::HeaderNotFound(_)));
}

#[test]
fn test_extract_and_clean_are_idempotent() {
    let first = clean_rows(extract_table_rows(SAMPLE_RESULTS_HTML).unwrap()).unwrap();
    let second = clean_rows(extract_table_rows(SAMPLE_RESULTS_HTML).unwrap()).unwrap();
    assert_eq!(first, second);
}
