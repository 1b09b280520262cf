//! Aspect-preserving resize geometry.
//!
//! This is the one place a coordinate error would silently corrupt every
//! downstream label: the same [`GeometryPlan`] drives both the pixel resample
//! and the bounding box rewrite, so the two cannot drift apart.

mod bbox;

pub use bbox::BBox;

use crate::error::LetterboxError;

/// Where the padding goes after the aspect-preserving resize.
///
/// This mirrors the CLI's `--padding` flag but is decoupled from clap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PadPolicy {
    /// Resized content anchored at (0, 0); padding only on the bottom/right
    /// edges. The historical behavior of this tool.
    #[default]
    Origin,
    /// Padding split evenly on both sides, remainder going bottom/right.
    Centered,
}

/// Per-image resize parameters, computed once and applied to both the pixel
/// plane and every bounding box of that image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryPlan {
    /// Uniform scale applied to both axes.
    pub scale: f64,
    /// Content dimensions after scaling, before padding.
    pub resized_w: u32,
    pub resized_h: u32,
    /// Offset of the resized content on the target canvas.
    pub pad_left: u32,
    pub pad_top: u32,
}

impl GeometryPlan {
    /// True when the plan leaves geometry untouched: nothing to rescale or
    /// shift, only a possible re-encode of identical pixels.
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.pad_left == 0 && self.pad_top == 0
    }
}

/// Computes the resize plan for one image.
///
/// The longer input axis is pinned to its target edge and the other axis
/// follows at the same scale, rounded to whole pixels:
/// landscape inputs get `resized_w == target_w`, portrait and square inputs
/// get `resized_h == target_h`.
///
/// # Errors
/// `InvalidDimension` if any dimension is zero.
pub fn plan(
    input_w: u32,
    input_h: u32,
    target_w: u32,
    target_h: u32,
    pad: PadPolicy,
) -> Result<GeometryPlan, LetterboxError> {
    if input_w == 0 || input_h == 0 {
        return Err(LetterboxError::InvalidDimension {
            context: "input image".to_string(),
            width: i64::from(input_w),
            height: i64::from(input_h),
        });
    }
    if target_w == 0 || target_h == 0 {
        return Err(LetterboxError::InvalidDimension {
            context: "target canvas".to_string(),
            width: i64::from(target_w),
            height: i64::from(target_h),
        });
    }

    let (scale, resized_w, resized_h) = if input_w > input_h {
        let scale = f64::from(target_w) / f64::from(input_w);
        let resized_h = (f64::from(input_h) * scale).round() as u32;
        (scale, target_w, resized_h)
    } else {
        let scale = f64::from(target_h) / f64::from(input_h);
        let resized_w = (f64::from(input_w) * scale).round() as u32;
        (scale, resized_w, target_h)
    };

    let (pad_left, pad_top) = match pad {
        PadPolicy::Origin => (0, 0),
        PadPolicy::Centered => (
            target_w.saturating_sub(resized_w) / 2,
            target_h.saturating_sub(resized_h) / 2,
        ),
    };

    Ok(GeometryPlan {
        scale,
        resized_w,
        resized_h,
        pad_left,
        pad_top,
    })
}

/// Maps a corner-corner box through a plan: uniform scale, then the pad
/// offset.
///
/// Scaling and translation are monotonic and `scale > 0`, so ordering
/// (x1 <= x2, y1 <= y2) is preserved. No clamping happens here; that is the
/// caller's policy decision.
pub fn map_box(bbox: &BBox, plan: &GeometryPlan) -> BBox {
    let dx = f64::from(plan.pad_left);
    let dy = f64::from(plan.pad_top);
    BBox::from_xyxy(
        bbox.x1 * plan.scale + dx,
        bbox.y1 * plan.scale + dy,
        bbox.x2 * plan.scale + dx,
        bbox.y2 * plan.scale + dy,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_pins_width() {
        // 100x50 into 64x64: scale 0.64, content 64x32, no padding offset.
        let plan = plan(100, 50, 64, 64, PadPolicy::Origin).expect("plan failed");
        assert_eq!(plan.scale, 0.64);
        assert_eq!((plan.resized_w, plan.resized_h), (64, 32));
        assert_eq!((plan.pad_left, plan.pad_top), (0, 0));
    }

    #[test]
    fn portrait_pins_height() {
        // 50x100 into 64x64: scale 0.64, content 32x64.
        let plan = plan(50, 100, 64, 64, PadPolicy::Origin).expect("plan failed");
        assert_eq!(plan.scale, 0.64);
        assert_eq!((plan.resized_w, plan.resized_h), (32, 64));
        assert_eq!((plan.pad_left, plan.pad_top), (0, 0));
    }

    #[test]
    fn square_input_takes_portrait_branch() {
        let plan = plan(80, 80, 64, 64, PadPolicy::Origin).expect("plan failed");
        assert_eq!((plan.resized_w, plan.resized_h), (64, 64));
        assert_eq!(plan.scale, 0.8);
    }

    #[test]
    fn already_target_sized_is_identity() {
        let plan = plan(64, 64, 64, 64, PadPolicy::Origin).expect("plan failed");
        assert_eq!(plan.scale, 1.0);
        assert_eq!((plan.resized_w, plan.resized_h), (64, 64));
        assert!(plan.is_identity());
    }

    #[test]
    fn centered_padding_splits_slack() {
        let landscape = plan(100, 50, 64, 64, PadPolicy::Centered).expect("plan failed");
        assert_eq!((landscape.pad_left, landscape.pad_top), (0, 16));

        let portrait = plan(50, 100, 64, 64, PadPolicy::Centered).expect("plan failed");
        assert_eq!((portrait.pad_left, portrait.pad_top), (16, 0));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            plan(0, 50, 64, 64, PadPolicy::Origin),
            Err(LetterboxError::InvalidDimension { .. })
        ));
        assert!(matches!(
            plan(100, 50, 64, 0, PadPolicy::Origin),
            Err(LetterboxError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn map_box_scales_and_keeps_order() {
        let plan = plan(100, 50, 64, 64, PadPolicy::Origin).expect("plan failed");
        let mapped = map_box(&BBox::from_xywh([10.0, 10.0, 20.0, 10.0]), &plan);

        assert!((mapped.x1 - 6.4).abs() < 1e-9);
        assert!((mapped.y1 - 6.4).abs() < 1e-9);
        assert!((mapped.x2 - 19.2).abs() < 1e-9);
        assert!((mapped.y2 - 12.8).abs() < 1e-9);
        assert!(mapped.is_ordered());

        let xywh = mapped.to_xywh();
        assert!((xywh[2] - 12.8).abs() < 1e-9);
        assert!((xywh[3] - 6.4).abs() < 1e-9);
    }

    #[test]
    fn map_box_applies_pad_offset() {
        let plan = plan(50, 100, 64, 64, PadPolicy::Centered).expect("plan failed");
        let mapped = map_box(&BBox::from_xywh([0.0, 0.0, 50.0, 100.0]), &plan);

        // Full-image box lands exactly on the centered content region.
        assert!((mapped.x1 - 16.0).abs() < 1e-9);
        assert!((mapped.y1 - 0.0).abs() < 1e-9);
        assert!((mapped.x2 - 48.0).abs() < 1e-9);
        assert!((mapped.y2 - 64.0).abs() < 1e-9);
    }

    #[test]
    fn map_box_round_trips_through_inverse() {
        let plan = plan(100, 50, 64, 64, PadPolicy::Centered).expect("plan failed");
        let original = BBox::from_xywh([12.5, 7.25, 30.0, 21.5]);
        let mapped = map_box(&original, &plan);

        let inv = |v: f64, pad: u32| (v - f64::from(pad)) / plan.scale;
        let restored = BBox::from_xyxy(
            inv(mapped.x1, plan.pad_left),
            inv(mapped.y1, plan.pad_top),
            inv(mapped.x2, plan.pad_left),
            inv(mapped.y2, plan.pad_top),
        );

        assert!((restored.x1 - original.x1).abs() < 1e-9);
        assert!((restored.y1 - original.y1).abs() < 1e-9);
        assert!((restored.x2 - original.x2).abs() < 1e-9);
        assert!((restored.y2 - original.y2).abs() < 1e-9);
    }
}
