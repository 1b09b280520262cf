//! Property tests for the resize geometry.

use letterbox::geometry::{map_box, plan, BBox, PadPolicy};
use proptest::prelude::*;

/// Strictly landscape input dimensions (width > height).
fn landscape_dims() -> impl Strategy<Value = (u32, u32)> {
    (2u32..=4096).prop_flat_map(|w| (Just(w), 1u32..w))
}

fn any_dims() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=4096, 1u32..=4096)
}

fn any_pad() -> impl Strategy<Value = PadPolicy> {
    prop_oneof![Just(PadPolicy::Origin), Just(PadPolicy::Centered)]
}

/// Ordered boxes with non-negative extent.
fn ordered_box() -> impl Strategy<Value = BBox> {
    (0.0f64..2000.0, 0.0f64..2000.0, 0.0f64..500.0, 0.0f64..500.0)
        .prop_map(|(x, y, w, h)| BBox::from_xywh([x, y, w, h]))
}

proptest! {
    #[test]
    fn landscape_pins_width_to_target(
        (input_w, input_h) in landscape_dims(),
        target_w in 1u32..=1024,
        target_h in 1u32..=1024,
        pad in any_pad(),
    ) {
        let plan = plan(input_w, input_h, target_w, target_h, pad).unwrap();
        prop_assert_eq!(plan.resized_w, target_w);
        // The minor axis shrinks by the same factor, so it can never exceed
        // the pinned axis.
        prop_assert!(plan.resized_h <= target_w);
    }

    #[test]
    fn square_target_is_never_overshot(
        (input_w, input_h) in any_dims(),
        target in 1u32..=1024,
        pad in any_pad(),
    ) {
        let plan = plan(input_w, input_h, target, target, pad).unwrap();
        prop_assert!(plan.resized_w <= target);
        prop_assert!(plan.resized_h <= target);
        // Padding never pushes content off the canvas.
        prop_assert!(plan.pad_left + plan.resized_w <= target);
        prop_assert!(plan.pad_top + plan.resized_h <= target);
    }

    #[test]
    fn scale_matches_pinned_axis(
        (input_w, input_h) in any_dims(),
        target in 1u32..=1024,
    ) {
        let plan = plan(input_w, input_h, target, target, PadPolicy::Origin).unwrap();
        let expected = if input_w > input_h {
            f64::from(target) / f64::from(input_w)
        } else {
            f64::from(target) / f64::from(input_h)
        };
        prop_assert!((plan.scale - expected).abs() < 1e-12);
        prop_assert!(plan.scale > 0.0);
    }

    #[test]
    fn target_sized_input_is_identity(
        (w, h) in any_dims(),
    ) {
        let plan = plan(w, h, w, h, PadPolicy::Origin).unwrap();
        prop_assert_eq!(plan.scale, 1.0);
        prop_assert_eq!((plan.resized_w, plan.resized_h), (w, h));
        prop_assert!(plan.is_identity());
    }

    #[test]
    fn mapped_boxes_stay_ordered(
        bbox in ordered_box(),
        (input_w, input_h) in any_dims(),
        target in 1u32..=1024,
        pad in any_pad(),
    ) {
        let plan = plan(input_w, input_h, target, target, pad).unwrap();
        let mapped = map_box(&bbox, &plan);
        prop_assert!(mapped.is_ordered());
    }

    #[test]
    fn map_round_trips_through_inverse(
        bbox in ordered_box(),
        (input_w, input_h) in any_dims(),
        target in 1u32..=1024,
        pad in any_pad(),
    ) {
        let plan = plan(input_w, input_h, target, target, pad).unwrap();
        let mapped = map_box(&bbox, &plan);

        let inv_x = |v: f64| (v - f64::from(plan.pad_left)) / plan.scale;
        let inv_y = |v: f64| (v - f64::from(plan.pad_top)) / plan.scale;

        // Relative tolerance: the forward scale can be large or tiny.
        let eps = 1e-6 * (1.0 + bbox.x2.abs().max(bbox.y2.abs()));
        prop_assert!((inv_x(mapped.x1) - bbox.x1).abs() < eps);
        prop_assert!((inv_y(mapped.y1) - bbox.y1).abs() < eps);
        prop_assert!((inv_x(mapped.x2) - bbox.x2).abs() < eps);
        prop_assert!((inv_y(mapped.y2) - bbox.y2).abs() < eps);
    }
}
