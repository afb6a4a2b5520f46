//! Size and entry accounting for selected paths and their outputs.

use crate::constants::{SIZE_THRESHOLD, SIZE_UNITS};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Total size in bytes of a file, or of every regular file below a directory.
///
/// The walk is iterative and never follows symbolic links, so deep trees and
/// link cycles are both safe. Missing paths and unreadable entries count as 0.
pub fn total_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("skipping unreadable entry under {:?}: {}", path, e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

/// 1 for a file, the number of direct children for a directory, 0 if missing.
pub fn entry_count(path: &Path) -> usize {
    if path.is_dir() {
        WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .count()
    } else if path.is_file() {
        1
    } else {
        0
    }
}

/// Format a byte count with binary prefixes, e.g. `1536` -> `"1.50 KB"`.
pub fn human_readable(bytes: i64) -> String {
    if bytes <= 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= SIZE_THRESHOLD && unit_index < SIZE_UNITS.len() - 1 {
        size /= SIZE_THRESHOLD;
        unit_index += 1;
    }

    format!("{:.2} {}", size, SIZE_UNITS[unit_index])
}
