use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

/// Writes a small image with a diagonal gradient, so resampling has real
/// structure to chew on.
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(path).expect("write test image");
}
