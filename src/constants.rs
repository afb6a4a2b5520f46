pub const DEFAULT_QUALITY: f32 = 0.7;
pub const MIN_QUALITY: f32 = 0.1;
pub const MAX_QUALITY: f32 = 1.0;

/// Appended to the input directory name or file stem to name the output.
pub const OUTPUT_SUFFIX: &str = "_compress";
pub const OUTPUT_EXTENSION: &str = "jpg";

pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

pub const SIZE_UNITS: &[&str] = &["Byte", "KB", "MB", "GB", "TB"];
pub const SIZE_THRESHOLD: f64 = 1024.0;

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}";
pub const PROGRESS_CHARS: &str = "=>-";

pub const CONFIRM_PROMPT: &str = "Start compression?";
pub const QUALITY_PROMPT: &str = "Image quality (0.1 ~ 1.0)";
