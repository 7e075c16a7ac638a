use crate::constants::RACE_TIME_PATTERN;
use crate::errors::{AppError, AppResult};
use crate::models::{RaceRecord, RaceTime, ResultRow};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Cached regex for race times.
/// Compiled once at initialization for performance.
static RACE_TIME_REGEX: OnceLock<Regex> = OnceLock::new();

/// Parses a race time in strict `MM:SS` form.
///
/// The minute part may be one to three digits and may exceed 59; the
/// second part is exactly two digits. Anything else, including embedded
/// whitespace or an hours part, is rejected.
///
/// # Errors
///
/// Returns `TimeParseError` naming the offending value.
pub fn parse_race_time(value: &str) -> AppResult<RaceTime> {
    let race_time_regex = RACE_TIME_REGEX.get_or_init(|| {
        Regex::new(RACE_TIME_PATTERN).expect("RACE_TIME_PATTERN is a valid regex pattern")
    });

    let captures = race_time_regex
        .captures(value)
        .ok_or_else(|| AppError::TimeParseError {
            value: value.to_string(),
        })?;

    let minutes: u32 = captures[1].parse().map_err(|_| AppError::TimeParseError {
        value: value.to_string(),
    })?;
    let seconds: u32 = captures[2].parse().map_err(|_| AppError::TimeParseError {
        value: value.to_string(),
    })?;

    Ok(RaceTime::new(minutes, seconds))
}

/// Coerces one integer-typed cell, naming the field on failure.
fn coerce_int(field: &str, value: &str) -> AppResult<i64> {
    value.parse().map_err(|_| AppError::TypeCoercionError {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Derives the typed fields for every record of the merged dataset.
///
/// Parses `Total Time` into a [`RaceTime`], derives `minutes` as total
/// seconds over 60, and coerces `Place`, `Bib No` and `Age` to integers.
/// The first malformed value aborts the whole run; downstream sorting and
/// typing require full-column validity, so there is no partial-record
/// recovery.
///
/// # Errors
///
/// Returns `TimeParseError` or `TypeCoercionError` for the first bad cell.
pub fn normalize_records(rows: Vec<ResultRow>) -> AppResult<Vec<RaceRecord>> {
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let time = parse_race_time(&row.total_time)?;

        records.push(RaceRecord {
            place: coerce_int("Place", &row.place)?,
            name: row.name,
            team: row.team,
            bib_no: coerce_int("Bib No", &row.bib_no)?,
            age: coerce_int("Age", &row.age)?,
            gender: row.gender,
            age_group: row.age_group,
            total_time: row.total_time,
            pace: row.pace,
            year: row.year,
            minutes: time.as_minutes(),
            time,
        });
    }

    debug!(records = records.len(), "Records normalized");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{normalize_records, parse_race_time};
    use crate::errors::AppError;
    use crate::models::{RaceTime, ResultRow};

    fn result_row(total_time: &str) -> ResultRow {
        ResultRow {
            place: "1".to_string(),
            name: "Alice".to_string(),
            team: "UNATTACHED".to_string(),
            bib_no: "189".to_string(),
            age: "20".to_string(),
            gender: "F".to_string(),
            age_group: "1/48 13-39".to_string(),
            total_time: total_time.to_string(),
            pace: "5:55/M".to_string(),
            year: 2015,
        }
    }

    #[test]
    fn test_parse_race_time_basic() {
        assert_eq!(parse_race_time("16:51").unwrap(), RaceTime::new(16, 51));
        assert_eq!(parse_race_time("9:05").unwrap(), RaceTime::new(9, 5));
    }

    #[test]
    fn test_parse_race_time_minutes_beyond_an_hour() {
        assert_eq!(parse_race_time("104:32").unwrap(), RaceTime::new(104, 32));
    }

    #[test]
    fn test_parse_race_time_rejects_malformed_values() {
        for value in [
            "", ":51", "16:", "16:5", "16:511", "1651", "16.51", "1:02:03", "16:51 ", " 16:51",
            "abc", "-16:51", "1000:00",
        ] {
            let err = parse_race_time(value).unwrap_err();
            assert!(
                matches!(err, AppError::TimeParseError { .. }),
                "expected TimeParseError for {value:?}"
            );
        }
    }

    #[test]
    fn test_normalize_records_derives_time_and_minutes() {
        let records = normalize_records(vec![result_row("16:51")]).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.time, RaceTime::new(16, 51));
        assert_eq!(record.minutes, 16.85);
        assert_eq!(record.total_time, "16:51");
    }

    #[test]
    fn test_normalize_records_coerces_integer_columns() {
        let records = normalize_records(vec![result_row("20:20")]).unwrap();

        let record = &records[0];
        assert_eq!(record.place, 1);
        assert_eq!(record.bib_no, 189);
        assert_eq!(record.age, 20);
    }

    #[test]
    fn test_normalize_records_bad_time_is_fatal() {
        let err = normalize_records(vec![result_row("dnf")]).unwrap_err();
        assert!(matches!(err, AppError::TimeParseError { .. }));
    }

    #[test]
    fn test_normalize_records_bad_integer_names_field() {
        let mut row = result_row("20:20");
        row.bib_no = "n/a".to_string();

        let err = normalize_records(vec![row]).unwrap_err();
        match err {
            AppError::TypeCoercionError { field, value } => {
                assert_eq!(field, "Bib No");
                assert_eq!(value, "n/a");
            }
            other => panic!("expected TypeCoercionError, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_records_keeps_string_columns_verbatim() {
        let records = normalize_records(vec![result_row("20:20")]).unwrap();

        let record = &records[0];
        assert_eq!(record.gender, "F");
        assert_eq!(record.age_group, "1/48 13-39");
        assert_eq!(record.pace, "5:55/M");
        assert_eq!(record.year, 2015);
    }
}
