use crate::constants::{CELL_SELECTOR, ROW_SELECTOR, TABLE_SELECTOR};
use crate::errors::{AppError, AppResult};
use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Cached CSS selector for the results table.
/// Compiled once at initialization for performance.
static TABLE_SELECTOR_CACHED: OnceLock<Selector> = OnceLock::new();

/// Cached CSS selector for table rows.
static ROW_SELECTOR_CACHED: OnceLock<Selector> = OnceLock::new();

/// Cached CSS selector for header and data cells.
static CELL_SELECTOR_CACHED: OnceLock<Selector> = OnceLock::new();

/// Extracts the rows of the first table element in an HTML document.
///
/// For each `tr` within the table, collects the text content of every
/// `th`/`td` cell, trimmed of leading and trailing whitespace, into an
/// ordered sequence of strings. Rows come back in document order; no
/// classification happens here, so title rows and repeated header rows are
/// still present in the output.
///
/// # Returns
///
/// One `Vec<String>` per table row, each entry the trimmed text of a cell.
///
/// # Errors
///
/// Returns `StructureError` if the document contains no table element.
pub fn extract_table_rows(html: &str) -> AppResult<Vec<Vec<String>>> {
    let document = Html::parse_document(html);

    let table_selector = TABLE_SELECTOR_CACHED.get_or_init(|| {
        Selector::parse(TABLE_SELECTOR).expect("TABLE_SELECTOR is a valid CSS selector")
    });
    let row_selector = ROW_SELECTOR_CACHED.get_or_init(|| {
        Selector::parse(ROW_SELECTOR).expect("ROW_SELECTOR is a valid CSS selector")
    });
    let cell_selector = CELL_SELECTOR_CACHED.get_or_init(|| {
        Selector::parse(CELL_SELECTOR).expect("CELL_SELECTOR is a valid CSS selector")
    });

    let table = document
        .select(table_selector)
        .next()
        .ok_or_else(|| AppError::StructureError("No table element found in document".to_string()))?;

    let mut rows = Vec::new();
    for row in table.select(row_selector) {
        let cells: Vec<String> = row
            .select(cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();
        rows.push(cells);
    }

    Ok(rows)
}
