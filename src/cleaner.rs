use crate::constants::COLUMN_COUNT;
use crate::errors::{AppError, AppResult};
use tracing::debug;

/// Splits raw table rows into the canonical header and the cleaned data rows.
///
/// The header is the first row with exactly [`COLUMN_COUNT`] cells. Data
/// rows keep their original order and are retained only if they also have
/// [`COLUMN_COUNT`] cells and are not element-wise equal to the header.
/// Everything else (title rows, repeated header rows) is discarded.
///
/// # Returns
///
/// The header labels and the surviving data rows.
///
/// # Errors
///
/// Returns `HeaderNotFound` if no row has the expected column count.
pub fn clean_rows(rows: Vec<Vec<String>>) -> AppResult<(Vec<String>, Vec<Vec<String>>)> {
    let total = rows.len();

    let header = rows
        .iter()
        .find(|row| row.len() == COLUMN_COUNT)
        .cloned()
        .ok_or_else(|| {
            AppError::HeaderNotFound(format!(
                "No row with {COLUMN_COUNT} columns among {total} table rows"
            ))
        })?;

    let data_rows: Vec<Vec<String>> = rows
        .into_iter()
        .filter(|row| row.len() == COLUMN_COUNT && *row != header)
        .collect();

    debug!(
        total_rows = total,
        data_rows = data_rows.len(),
        "Table rows cleaned"
    );

    Ok((header, data_rows))
}
