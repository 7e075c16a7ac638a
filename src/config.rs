use crate::constants::{DEFAULT_OUTPUT_PATH, RESULTS_URL_TEMPLATE};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved configuration with all values filled in (no Options).
///
/// This struct represents the pipeline defaults and can be deserialized by
/// the TOML loader. All fields have concrete values, making it safe to
/// access directly without unwrapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// URL template for the per-year results page; `{year}` is substituted.
    pub url_template: String,
    /// Path of the output Parquet file.
    pub output_path: PathBuf,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            url_template: RESULTS_URL_TEMPLATE.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            request_timeout_secs: 30,
        }
    }
}

/// Configuration that can be loaded from a TOML file.
///
/// Deserializes the required `years` list and optional pipeline
/// configuration. The parser rejects unknown keys to catch typos, and
/// validates that at least one year is listed and the timeout is positive.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolvedConfigFile {
    /// Years to fetch and merge, processed in the listed order
    pub years: Vec<i32>,
    /// Flattened resolved configuration with pipeline defaults
    #[serde(flatten)]
    pub resolved: ResolvedConfig,
}

impl ResolvedConfigFile {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed, required fields are
    /// missing, unknown keys are present, the years list is empty, or the
    /// timeout is zero.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfigFile = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        if config.years.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one year must be configured".into(),
            ));
        }
        if config.resolved.request_timeout_secs == 0 {
            return Err(AppError::InvalidInput(
                "Request timeout must be greater than 0".into(),
            ));
        }

        Ok(config)
    }
}
