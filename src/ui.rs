use crate::errors::{AppError, AppResult};
use indicatif::{ProgressBar, ProgressStyle};

/// Creates a progress bar with the standard application styling.
///
/// This helper centralizes the progress bar configuration so every stage
/// reports progress the same way.
///
/// # Arguments
///
/// * `total` - Total number of items to process
///
/// # Example
///
/// ```no_run
/// use rrd_cli::ui;
///
/// # fn main() -> Result<(), rrd_cli::errors::AppError> {
/// let pb = ui::create_progress_bar(3)?;
/// pb.inc(1);
/// pb.finish_with_message("Done");
/// # Ok(())
/// # }
/// ```
pub fn create_progress_bar(total: u64) -> AppResult<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
            )
            .map_err(|e| AppError::IoError(format!("Failed to create progress bar template: {e}")))?
            .progress_chars("#>-"),
    );
    Ok(pb)
}
