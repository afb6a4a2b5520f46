//! Helpers shared by the batch runner and the recompressor.

use crate::constants::{PROGRESS_BAR_TEMPLATE, PROGRESS_CHARS};
use indicatif::{ProgressBar, ProgressStyle};

/// Create a job progress bar with consistent styling
///
/// # Arguments
/// * `total` - Number of jobs the bar will track
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(PROGRESS_CHARS);
    pb.set_style(style);
    pb
}

/// Calculate compression ratio as a percentage
///
/// # Returns
/// * Positive means reduction, negative means the output grew
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}
