//! rrd-cli library
//!
//! This crate provides the core functionality for the `rrd-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is a straight-line pipeline over per-year race results pages:
//!
//! - [`fetcher`] - Builds per-year URLs and retrieves raw HTML from the results site
//! - [`extractor`] - Locates the results table and yields rows of trimmed cell text
//! - [`cleaner`] - Finds the header row by column count and discards titles and repeated headers
//! - [`builder`] - Binds cleaned rows to column labels, tags records with their year, merges years
//! - [`normalizer`] - Parses `MM:SS` race times and coerces integer columns
//! - [`sink`] - Sorts the combined dataset by time and writes a Parquet file
//! - [`cli`] - Command-line interface orchestrating the whole workflow
//! - [`models`] - Data structures for raw and normalized records
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! The binary drives everything through the CLI entry point:
//!
//! ```no_run
//! use rrd_cli::{cli, errors::AppResult};
//!
//! # async fn example() -> AppResult<()> {
//! cli::cli().await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod normalizer;
pub mod sink;
pub mod ui;
