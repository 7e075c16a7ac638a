// Data source
pub const RESULTS_URL_TEMPLATE: &str = "https://www.hubertiming.com/results/{year}GPTR10K";
pub const YEAR_PLACEHOLDER: &str = "{year}";

// Results table schema
pub const EXPECTED_COLUMNS: &[&str] = &[
    "Place",
    "Name",
    "Team",
    "Bib No",
    "Age",
    "Gender",
    "Age Group",
    "Total Time",
    "Pace",
];
pub const COLUMN_COUNT: usize = EXPECTED_COLUMNS.len();

// Selectors and Patterns
pub const TABLE_SELECTOR: &str = "table";
pub const ROW_SELECTOR: &str = "tr";
pub const CELL_SELECTOR: &str = "th, td";
pub const RACE_TIME_PATTERN: &str = r"^(\d{1,3}):(\d{2})$";

// Output
pub const DEFAULT_OUTPUT_PATH: &str = "data/parquet/results.parquet";
