use std::fmt;
use std::time::Duration;

/// One cleaned results row bound to its source year.
///
/// All nine fields hold the raw cell text exactly as extracted from the
/// table; type conversion happens later in the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub place: String,
    pub name: String,
    pub team: String,
    pub bib_no: String,
    pub age: String,
    pub gender: String,
    pub age_group: String,
    pub total_time: String,
    pub pace: String,
    pub year: i32,
}

/// A race time parsed from `MM:SS`.
///
/// The minute part may exceed 59; the source data never carries an hours
/// part, so no rollover into hours is performed anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceTime {
    minutes: u32,
    seconds: u32,
}

impl RaceTime {
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self { minutes, seconds }
    }

    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    /// Fractional minutes: total seconds divided by 60.
    pub fn as_minutes(&self) -> f64 {
        f64::from(self.total_seconds()) / 60.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.total_seconds()))
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// A fully typed race result record, ready for the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceRecord {
    pub place: i64,
    pub name: String,
    pub team: String,
    pub bib_no: i64,
    pub age: i64,
    pub gender: String,
    pub age_group: String,
    pub total_time: String,
    pub pace: String,
    pub year: i32,
    pub time: RaceTime,
    pub minutes: f64,
}
