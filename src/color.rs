use image::{DynamicImage, Rgb, RgbImage};

pub fn has_alpha(image: &DynamicImage) -> bool {
    image.color().has_alpha()
}

/// Flatten an image with an alpha channel onto an opaque black RGB canvas.
///
/// Baseline JPEG has no alpha plane, so a 32-bit image must become 24-bit
/// before encoding. Images without alpha are returned as-is, without a copy.
pub fn strip_alpha(image: DynamicImage) -> DynamicImage {
    if !has_alpha(&image) {
        return image;
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut canvas = RgbImage::new(width, height);

    for (src, dst) in rgba.pixels().zip(canvas.pixels_mut()) {
        let [r, g, b, a] = src.0;
        *dst = Rgb([over_black(r, a), over_black(g, a), over_black(b, a)]);
    }

    DynamicImage::ImageRgb8(canvas)
}

// src-over onto black reduces to premultiplying by alpha
fn over_black(channel: u8, alpha: u8) -> u8 {
    ((channel as u16 * alpha as u16 + 127) / 255) as u8
}
