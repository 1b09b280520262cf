//! Pixel-plane half of the resize: resample and composite onto the canvas.
//!
//! The geometry all comes from a [`GeometryPlan`]; this module only moves
//! pixels. Decoding and encoding stay with the caller so this function is
//! testable without touching the filesystem.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::geometry::GeometryPlan;

/// Resamples `img` to the plan's content dimensions and composites it onto a
/// black canvas of `(target_w, target_h)` at the plan's pad offset.
///
/// The returned buffer always has exactly the target dimensions. Unfilled
/// canvas pixels are zero (black).
pub fn letterbox_image(
    img: &DynamicImage,
    plan: &GeometryPlan,
    target_w: u32,
    target_h: u32,
    filter: FilterType,
) -> RgbImage {
    let rgb = img.to_rgb8();

    // Already at target size with nothing to shift: skip the resample, which
    // would otherwise soften pixels for no geometric change.
    if plan.is_identity() && rgb.dimensions() == (target_w, target_h) {
        return rgb;
    }

    let resized = imageops::resize(&rgb, plan.resized_w, plan.resized_h, filter);

    let mut canvas = RgbImage::new(target_w, target_h);
    imageops::overlay(
        &mut canvas,
        &resized,
        i64::from(plan.pad_left),
        i64::from(plan.pad_top),
    );
    canvas
}
