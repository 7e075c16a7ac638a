use crate::constants::{COLUMN_COUNT, EXPECTED_COLUMNS};
use crate::errors::{AppError, AppResult};
use crate::models::ResultRow;

/// Validates the header labels against the expected column schema.
///
/// The site publishes exactly one table shape; any deviation (renamed,
/// reordered or resized columns) is treated as a fatal structure change
/// rather than guessed around.
fn validate_header(header: &[String]) -> AppResult<()> {
    let matches = header.len() == EXPECTED_COLUMNS.len()
        && header
            .iter()
            .zip(EXPECTED_COLUMNS.iter())
            .all(|(have, want)| have.as_str() == *want);

    if !matches {
        return Err(AppError::StructureError(format!(
            "Unexpected header columns {header:?}, expected {EXPECTED_COLUMNS:?}"
        )));
    }

    Ok(())
}

/// Builds one [`ResultRow`] per cleaned row for a single year.
///
/// Cells are bound to fields in header order, and every record is tagged
/// with the source year before it joins the combined dataset.
///
/// # Errors
///
/// Returns `StructureError` if the header labels deviate from the expected
/// schema or a row does not have exactly one cell per column.
pub fn build_records(
    header: &[String],
    rows: Vec<Vec<String>>,
    year: i32,
) -> AppResult<Vec<ResultRow>> {
    validate_header(header)?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let cells: [String; COLUMN_COUNT] = row.try_into().map_err(|row: Vec<String>| {
            AppError::StructureError(format!(
                "Row has {} cells, expected {COLUMN_COUNT}",
                row.len()
            ))
        })?;
        let [place, name, team, bib_no, age, gender, age_group, total_time, pace] = cells;

        records.push(ResultRow {
            place,
            name,
            team,
            bib_no,
            age,
            gender,
            age_group,
            total_time,
            pace,
            year,
        });
    }

    Ok(records)
}

/// Concatenates per-year record batches into one dataset.
///
/// Batches are appended in the given order and each batch keeps its
/// internal order, so the combined dataset preserves the configured year
/// order and the original page order within a year.
pub fn merge_years(batches: Vec<Vec<ResultRow>>) -> Vec<ResultRow> {
    batches.into_iter().flatten().collect()
}
