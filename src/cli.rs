use crate::config::{ResolvedConfig, ResolvedConfigFile};
use crate::errors::{AppError, AppResult};
use crate::models::ResultRow;
use crate::{builder, cleaner, extractor, fetcher, normalizer, sink, ui};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and executes the scrape command.
///
/// This function handles two subcommands:
/// - `run`: Manual CLI with default configuration and per-flag overrides
/// - `toml`: Run using a TOML configuration file
///
/// Both subcommands execute the same workflow:
/// 1. Fetches the results page for each configured year, in order
/// 2. Extracts the rows of the sole results table
/// 3. Cleans out title rows and repeated header rows
/// 4. Builds year-tagged records and merges the per-year batches
/// 5. Derives the time and minutes columns and coerces integer columns
/// 6. Sorts by time and writes one Parquet file
///
/// # Errors
///
/// Returns an error if argument parsing, any fetch, any parse stage, or
/// the Parquet write fails. The pipeline stops at the first failure.
pub async fn cli() -> AppResult<()> {
    let cmd = Command::new("rrd-cli")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("run")
                .about("Fetch, clean, and export a set of result years")
                .after_help(
                    "Years are merged in the order given.\nExample:\n  rrd-cli run -y 2015 -y 2016 -o data/parquet/results.parquet",
                )
                .arg(
                    Arg::new("years")
                        .short('y')
                        .long("year")
                        .help("Year to fetch; repeat the flag to merge several years")
                        .required(true)
                        .value_parser(clap::value_parser!(i32))
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Path of the output Parquet file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("url_template")
                        .short('u')
                        .long("url-template")
                        .help("Results page URL template containing a {year} placeholder")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .help("HTTP request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        );

    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("run", sub)) => {
            let years: Vec<i32> = sub
                .get_many::<i32>("years")
                .expect("years is required")
                .copied()
                .collect();

            let mut resolved_config = ResolvedConfig::default();
            if let Some(output) = sub.get_one::<PathBuf>("output") {
                resolved_config.output_path = output.clone();
            }
            if let Some(template) = sub.get_one::<String>("url_template") {
                resolved_config.url_template = template.clone();
            }
            if let Some(&timeout) = sub.get_one::<u64>("timeout") {
                resolved_config.request_timeout_secs = timeout;
            }

            run_workflow(&years, &resolved_config).await?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");

            let file_config = ResolvedConfigFile::from_toml_file(config_path)?;
            run_workflow(&file_config.years, &file_config.resolved).await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

async fn run_workflow(years: &[i32], config: &ResolvedConfig) -> AppResult<()> {
    if years.is_empty() {
        return Err(AppError::InvalidInput(
            "At least one year must be given".into(),
        ));
    }

    info!(
        years = years.len(),
        output = %config.output_path.display(),
        "Starting scrape"
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    let pb = ui::create_progress_bar(years.len() as u64)?;

    // One batch per year, merged once after the loop.
    let mut batches: Vec<Vec<ResultRow>> = Vec::with_capacity(years.len());
    for &year in years {
        pb.set_message(format!("Fetching {year}..."));

        let url = fetcher::year_url(&config.url_template, year)?;
        let html = fetcher::fetch_page(&client, &url).await?;
        let rows = extractor::extract_table_rows(&html)?;
        let (header, data_rows) = cleaner::clean_rows(rows)?;
        let records = builder::build_records(&header, data_rows, year)?;

        info!(year, records = records.len(), "Year processed");
        batches.push(records);
        pb.inc(1);
    }
    pb.finish_with_message(format!("Fetched {} year(s)", years.len()));

    let merged = builder::merge_years(batches);
    let mut records = normalizer::normalize_records(merged)?;
    sink::sort_by_time(&mut records);
    sink::write_parquet(&records, &config.output_path)?;

    info!(
        years = years.len(),
        records = records.len(),
        output = %config.output_path.display(),
        "All operations completed successfully"
    );

    Ok(())
}
