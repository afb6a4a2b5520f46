#![allow(dead_code)]

use comp_img::{BatchResult, CompressionError, Prompter, Result, SelectionItem};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, Rgb, RgbImage};
use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Noisy gradient that behaves like photographic content under JPEG.
pub fn photo_like_image(width: u32, height: u32, seed: u32) -> DynamicImage {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let img = RgbImage::from_fn(width, height, |x, y| {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let noise = (state >> 16) as u8 % 48;
        Rgb([
            ((x * 255 / width) as u8).saturating_add(noise),
            ((y * 255 / height) as u8).saturating_add(noise / 2),
            (((x + y) * 127 / (width + height)) as u8).saturating_add(noise),
        ])
    });
    DynamicImage::ImageRgb8(img)
}

/// Write a high-quality JPEG so recompression at lower quality shrinks it.
pub fn write_jpeg(path: &Path, width: u32, height: u32, seed: u32) -> PathBuf {
    let file = File::create(path).unwrap();
    let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), 95);
    photo_like_image(width, height, seed)
        .write_with_encoder(encoder)
        .unwrap();
    path.to_path_buf()
}

pub fn create_jpeg_directory(dir: &Path, count: u32) -> Vec<PathBuf> {
    fs::create_dir_all(dir).unwrap();
    (0..count)
        .map(|i| write_jpeg(&dir.join(format!("photo{}.jpg", i)), 160, 120, i))
        .collect()
}

/// Prompter fed from canned answers; records everything it is shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub selections: VecDeque<Vec<SelectionItem>>,
    pub confirmations: VecDeque<bool>,
    pub qualities: VecDeque<Option<String>>,
    pub messages: Vec<String>,
    pub reports: Vec<BatchResult>,
    pub confirm_prompts: usize,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, paths: &[&Path]) -> Self {
        self.selections.push_back(
            paths
                .iter()
                .map(|p| SelectionItem::from_path(p.to_path_buf()))
                .collect(),
        );
        self
    }

    pub fn confirm_with(mut self, answer: bool) -> Self {
        self.confirmations.push_back(answer);
        self
    }

    pub fn quality(mut self, raw: &str) -> Self {
        self.qualities.push_back(Some(raw.to_string()));
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn select_paths(&mut self) -> Result<Vec<SelectionItem>> {
        Ok(self.selections.pop_front().unwrap_or_default())
    }

    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        self.confirm_prompts += 1;
        Ok(self.confirmations.pop_front().unwrap_or(true))
    }

    fn input_quality(&mut self) -> Result<Option<String>> {
        Ok(self.qualities.pop_front().flatten())
    }

    fn message(&mut self, text: &str) -> Result<()> {
        self.messages.push(text.to_string());
        Ok(())
    }

    fn report(&mut self, result: &BatchResult) -> Result<()> {
        self.reports.push(result.clone());
        Ok(())
    }
}

/// A boundary that cannot be displayed at all.
pub struct BrokenPrompter;

impl Prompter for BrokenPrompter {
    fn select_paths(&mut self) -> Result<Vec<SelectionItem>> {
        Err(CompressionError::Interaction("no display".to_string()))
    }

    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Err(CompressionError::Interaction("no display".to_string()))
    }

    fn input_quality(&mut self) -> Result<Option<String>> {
        Err(CompressionError::Interaction("no display".to_string()))
    }

    fn message(&mut self, _text: &str) -> Result<()> {
        Err(CompressionError::Interaction("no display".to_string()))
    }

    fn report(&mut self, _result: &BatchResult) -> Result<()> {
        Err(CompressionError::Interaction("no display".to_string()))
    }
}
