//! Image processing primitives used by the icon generator
//!
//! Thin layer over the `image` crate:
//! - Decoding a source image from disk (format sniffed from content)
//! - Contain-fit resizing onto a padded background (premultiplied alpha)
//! - Blank canvases and centered "over" compositing
//! - PNG encoding with explicit compression settings

use crate::error::GenerationFailure;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::io::Reader as ImageReader;
use image::{ColorType, DynamicImage, ImageEncoder, ImageResult, Rgba, Rgba32FImage, RgbaImage};
use std::path::Path;

/// Fully transparent background.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngOptions {
    pub compression: CompressionType,
    pub filter: PngFilter,
}

impl Default for PngOptions {
    /// Maximal lossless compression with adaptive row filtering
    fn default() -> Self {
        Self {
            compression: CompressionType::Best,
            filter: PngFilter::Adaptive,
        }
    }
}

/// Decode an image file, guessing its format from the leading bytes
pub fn decode(path: &Path) -> Result<DynamicImage, GenerationFailure> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img)
}

/// Dimensions of a `width x height` image scaled uniformly to fit inside
/// `box_width x box_height` without cropping. Scales up as well as down.
pub fn contain_size(width: u32, height: u32, box_width: u32, box_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || box_width == 0 || box_height == 0 {
        return (0, 0);
    }

    let (w, h) = (width as u64, height as u64);
    let (bw, bh) = (box_width as u64, box_height as u64);

    if w * bh >= h * bw {
        // Width is the constraining edge
        let fitted = (2 * h * bw + w) / (2 * w);
        (box_width, (fitted as u32).clamp(1, box_height))
    } else {
        let fitted = (2 * w * bh + h) / (2 * h);
        ((fitted as u32).clamp(1, box_width), box_height)
    }
}

pub fn blank_canvas(width: u32, height: u32, background: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, background)
}

/// Offset that centers an `inner` extent inside `outer`, rounding down.
pub fn center_offset(outer: u32, inner: u32) -> i64 {
    (outer as i64 - inner as i64).div_euclid(2)
}

/// Alpha-composite `overlay` onto the middle of `canvas`.
pub fn composite_centered(canvas: &mut RgbaImage, overlay: &RgbaImage) -> (i64, i64) {
    let x = center_offset(canvas.width(), overlay.width());
    let y = center_offset(canvas.height(), overlay.height());
    imageops::overlay(canvas, overlay, x, y);
    (x, y)
}

/// Resize `img` with contain semantics into a `width x height` canvas filled
/// with `background`, the fitted image centered on it.
pub fn resize_contain(img: &DynamicImage, width: u32, height: u32, background: Rgba<u8>) -> RgbaImage {
    let mut canvas = blank_canvas(width, height, background);

    let source = img.to_rgba8();
    let (fit_width, fit_height) = contain_size(source.width(), source.height(), width, height);
    if fit_width == 0 || fit_height == 0 {
        return canvas;
    }

    let fitted = if source.dimensions() == (fit_width, fit_height) {
        source
    } else {
        resample(&source, fit_width, fit_height)
    };

    composite_centered(&mut canvas, &fitted);
    canvas
}

/// Lanczos3 resize in premultiplied alpha, so fully transparent pixels do not
/// bleed their colour into the logo's edges.
pub fn resample(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premultiplied = premultiply(img);
    let resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);
    unpremultiply(&resized)
}

// Channels are stored at half scale so lobe overshoot stays below the 1.0
// clamp and colour remains proportional to alpha.
const HEADROOM: f32 = 0.5;

fn premultiply(img: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let alpha = a as f32 / 255.0;
        let scale = alpha * HEADROOM / 255.0;
        Rgba([r as f32 * scale, g as f32 * scale, b as f32 * scale, alpha * HEADROOM])
    })
}

fn unpremultiply(img: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let alpha = ((a / HEADROOM) * 255.0).round().clamp(0.0, 255.0) as u8;
        if alpha == 0 {
            return TRANSPARENT;
        }
        let channel = |c: f32| ((c / a) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba([channel(r), channel(g), channel(b), alpha])
    })
}

pub fn encode_png(img: &RgbaImage, options: PngOptions) -> ImageResult<Vec<u8>> {
    let mut buffer = Vec::new();
    PngEncoder::new_with_quality(&mut buffer, options.compression, options.filter).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ColorType::Rgba8,
    )?;
    Ok(buffer)
}

/// Write encoded bytes to `path`, replacing any existing file
pub async fn write(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::write(path, bytes).await
}
