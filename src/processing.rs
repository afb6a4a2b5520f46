use crate::color::strip_alpha;
use crate::error::{CompressionError, Result};
use crate::utils::calculate_compression_ratio;
use crate::validation::is_jpeg_path;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageReader};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One input/output pair, created right before recompression and consumed by [`run`].
///
/// [`run`]: CompressionJob::run
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub quality: f32,
}

impl CompressionJob {
    pub fn new(input_path: PathBuf, output_path: PathBuf, quality: f32) -> Self {
        Self {
            input_path,
            output_path,
            quality,
        }
    }

    /// Returns the number of bytes written to `output_path`.
    pub fn run(self) -> Result<u64> {
        recompress(&self.input_path, &self.output_path, self.quality)
    }
}

/// Convert a `0.0..=1.0` quality factor to the encoder's `1..=100` scale.
pub fn encoder_quality(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Re-encode a single JPEG at an explicit quality.
///
/// # Arguments
/// * `input_path` - Source image, must carry a `.jpg`/`.jpeg` extension
/// * `output_path` - Destination file, created or overwritten; its parent must exist
/// * `quality` - 0.0 (smallest) to 1.0 (highest fidelity)
///
/// # Returns
/// * `Ok(bytes)` - Size of the written file
/// * `Err(CompressionError)` - `PathNotFound`, `NotAFile`, `UnsupportedFormat`,
///   `Io`, `Decode` or `Encode`
pub fn recompress(input_path: &Path, output_path: &Path, quality: f32) -> Result<u64> {
    info!("Original: {}", input_path.display());

    if !input_path.exists() {
        return Err(CompressionError::PathNotFound(input_path.to_path_buf()));
    }
    if !input_path.is_file() {
        return Err(CompressionError::NotAFile(input_path.to_path_buf()));
    }
    if !is_jpeg_path(input_path) {
        return Err(CompressionError::UnsupportedFormat(input_path.to_path_buf()));
    }

    let img = load_image(input_path)?;
    let img = strip_alpha(img);

    encode_jpeg(&img, output_path, quality)?;

    let original_size = fs::metadata(input_path)?.len();
    let compressed_size = fs::metadata(output_path)?.len();
    debug!(
        "{} -> {} bytes ({:.1}% smaller)",
        original_size,
        compressed_size,
        calculate_compression_ratio(original_size, compressed_size)
    );
    info!("Compressed: {}", output_path.display());

    Ok(compressed_size)
}

pub fn load_image(input_path: &Path) -> Result<DynamicImage> {
    ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| CompressionError::Decode {
            path: input_path.to_path_buf(),
            source,
        })
}

/// Write `img` as baseline JPEG. The file handle is dropped before returning
/// on every path, so the next job never sees it open.
pub fn encode_jpeg(img: &DynamicImage, output_path: &Path, quality: f32) -> Result<()> {
    let encode_err = |source: ImageError| CompressionError::Encode {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(|e| encode_err(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);

    let encoder = JpegEncoder::new_with_quality(&mut writer, encoder_quality(quality));
    img.write_with_encoder(encoder).map_err(encode_err)?;

    writer
        .flush()
        .map_err(|e| encode_err(ImageError::IoError(e)))?;

    Ok(())
}
