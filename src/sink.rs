use crate::errors::{AppError, AppResult};
use crate::models::RaceRecord;
use polars::prelude::*;
use std::fs::{self as std_fs, File};
use std::path::Path;
use tracing::info;

/// Sorts records ascending by race duration.
///
/// The sort is stable, so records with equal times keep their merge order.
pub fn sort_by_time(records: &mut [RaceRecord]) {
    records.sort_by_key(|record| record.time.total_seconds());
}

/// Converts records into a Polars DataFrame with one column per output field.
///
/// Column names match the source table labels, with the derived `Year`,
/// `Time` (duration, millisecond resolution) and `Minutes` columns
/// appended. Optimized to pre-allocate vectors with known capacity.
pub fn records_to_dataframe(records: &[RaceRecord]) -> AppResult<DataFrame> {
    let len = records.len();
    let mut places = Vec::with_capacity(len);
    let mut names = Vec::with_capacity(len);
    let mut teams = Vec::with_capacity(len);
    let mut bib_nos = Vec::with_capacity(len);
    let mut ages = Vec::with_capacity(len);
    let mut genders = Vec::with_capacity(len);
    let mut age_groups = Vec::with_capacity(len);
    let mut total_times = Vec::with_capacity(len);
    let mut paces = Vec::with_capacity(len);
    let mut years = Vec::with_capacity(len);
    let mut times_ms = Vec::with_capacity(len);
    let mut minutes = Vec::with_capacity(len);

    for record in records {
        places.push(record.place);
        names.push(record.name.clone());
        teams.push(record.team.clone());
        bib_nos.push(record.bib_no);
        ages.push(record.age);
        genders.push(record.gender.clone());
        age_groups.push(record.age_group.clone());
        total_times.push(record.total_time.clone());
        paces.push(record.pace.clone());
        years.push(record.year);
        times_ms.push(i64::from(record.time.total_seconds()) * 1_000);
        minutes.push(record.minutes);
    }

    let time_series = Series::new("Time", times_ms)
        .cast(&DataType::Duration(TimeUnit::Milliseconds))
        .map_err(|e| AppError::IoError(format!("Failed to build Time column: {e}")))?;

    DataFrame::new(vec![
        Series::new("Place", places),
        Series::new("Name", names),
        Series::new("Team", teams),
        Series::new("Bib No", bib_nos),
        Series::new("Age", ages),
        Series::new("Gender", genders),
        Series::new("Age Group", age_groups),
        Series::new("Total Time", total_times),
        Series::new("Pace", paces),
        Series::new("Year", years),
        time_series,
        Series::new("Minutes", minutes),
    ])
    .map_err(|e| AppError::IoError(format!("Failed to create DataFrame: {e}")))
}

/// Writes the sorted dataset as a single Parquet file.
///
/// Creates the parent directory if needed. The output file is truncated on
/// creation, so a rerun deterministically overwrites the previous artifact.
///
/// # Errors
///
/// Returns `IoError` if directory creation, file creation or the Parquet
/// write fails.
pub fn write_parquet(records: &[RaceRecord], path: &Path) -> AppResult<()> {
    let mut df = records_to_dataframe(records)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std_fs::create_dir_all(parent).map_err(|e| {
                AppError::IoError(format!(
                    "Failed to create output directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let mut file = File::create(path).map_err(|e| {
        AppError::IoError(format!("Failed to create output file {}: {e}", path.display()))
    })?;

    ParquetWriter::new(&mut file)
        .finish(&mut df)
        .map_err(|e| AppError::IoError(format!("Failed to write Parquet file: {e}")))?;

    info!(
        path = %path.display(),
        records = records.len(),
        "Dataset written"
    );

    Ok(())
}
