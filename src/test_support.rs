use image::{DynamicImage, Rgba, RgbaImage};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Temporary directory removed on drop
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("site-icons-{}", Uuid::new_v4()));
        fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Fully opaque single-colour logo
pub fn solid_logo(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([220, 40, 90, 255])))
}

pub const LOGO_COLOUR: [u8; 3] = [40, 120, 220];

/// Logo with a fully transparent `[0, 0, 0, 0]` margin and a one pixel
/// half-transparent anti-aliased rim around an opaque core
pub fn soft_logo(width: u32, height: u32, margin: u32) -> DynamicImage {
    let [r, g, b] = LOGO_COLOUR;
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        let inset = x.min(y).min(width - 1 - x).min(height - 1 - y);
        match inset.cmp(&margin) {
            Ordering::Less => Rgba([0, 0, 0, 0]),
            Ordering::Equal => Rgba([r, g, b, 128]),
            Ordering::Greater => Rgba([r, g, b, 255]),
        }
    }))
}

pub fn write_logo(path: &Path, width: u32, height: u32) {
    solid_logo(width, height).save(path).expect("save test logo");
}

/// Bounding box `(min_x, min_y, max_x, max_y)` of pixels with non-zero
/// alpha, max bounds exclusive.
pub fn alpha_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    alpha_bounds_over(img, 0)
}

/// Like `alpha_bounds`, counting only pixels with alpha above `threshold`
pub fn alpha_bounds_over(img: &RgbaImage, threshold: u8) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] <= threshold {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x + 1, y + 1),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
        });
    }
    bounds
}
