use crate::batch::BatchResult;
use crate::size::human_readable;
use std::path::Path;

/// Shown before confirmation: what will be compressed and where it lands.
pub fn render_plan(target: &Path, output: &Path) -> String {
    format!(
        "Target: {}\nOutput location: {}",
        target.display(),
        output.display()
    )
}

pub fn render_summary(result: &BatchResult) -> String {
    format!(
        "Compression complete.\n\
         Output location: {}\n\
         Files: {} --> {}\n\
         Quality: {:.1} %\n\
         Original size: {}\n\
         Compressed size: {}",
        result.output_dir.display(),
        result.input_count,
        result.output_count,
        result.quality * 100.0,
        human_readable(result.input_bytes as i64),
        human_readable(result.output_bytes as i64),
    )
}
