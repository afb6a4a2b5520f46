use crate::constants::{DEFAULT_QUALITY, JPEG_EXTENSIONS, MAX_QUALITY, MIN_QUALITY};
use std::fmt;
use std::path::Path;

/// Why a quality entry was replaced by the default.
#[derive(Debug, Clone, PartialEq)]
pub enum QualityWarning {
    NotANumber(String),
    OutOfRange(f32),
}

impl fmt::Display for QualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityWarning::NotANumber(raw) => write!(
                f,
                "'{}' is not a number, using default quality {}",
                raw, DEFAULT_QUALITY
            ),
            QualityWarning::OutOfRange(value) => write!(
                f,
                "{} is outside {} ~ {}, using default quality {}",
                value, MIN_QUALITY, MAX_QUALITY, DEFAULT_QUALITY
            ),
        }
    }
}

/// A validated quality value plus the warning issued if a fallback was used.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityInput {
    pub quality: f32,
    pub warning: Option<QualityWarning>,
}

impl QualityInput {
    fn fallback(warning: QualityWarning) -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            warning: Some(warning),
        }
    }
}

/// Parse a quality entry. `None` means the prompt was dismissed.
///
/// Anything that is not a number in `[MIN_QUALITY, MAX_QUALITY]` falls back
/// to `DEFAULT_QUALITY` with a warning rather than failing.
pub fn validate_quality(raw: Option<&str>) -> QualityInput {
    let text = raw.unwrap_or("").trim();

    match text.parse::<f32>() {
        Ok(value) if is_valid_quality(value) => QualityInput {
            quality: value,
            warning: None,
        },
        Ok(value) => QualityInput::fallback(QualityWarning::OutOfRange(value)),
        Err(_) => QualityInput::fallback(QualityWarning::NotANumber(text.to_string())),
    }
}

pub fn is_valid_quality(value: f32) -> bool {
    (MIN_QUALITY..=MAX_QUALITY).contains(&value)
}

/// `.jpg` / `.jpeg`, case-insensitive.
pub fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| JPEG_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
