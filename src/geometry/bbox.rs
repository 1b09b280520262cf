//! Corner-corner bounding box used by the geometry math.

/// An axis-aligned bounding box as (x1, y1, x2, y2) in pixel coordinates.
///
/// The annotation file stores boxes as `[x, y, width, height]`; all internal
/// math happens in corner-corner form and converts at the edges. The
/// constructor does not enforce x1 <= x2: malformed source boxes are
/// representable so the `check` pass can report them instead of the parser
/// panicking.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BBox {
    /// Creates a box from explicit corner coordinates.
    #[inline]
    pub fn from_xyxy(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a box from COCO's `[x, y, width, height]` convention, where
    /// `(x, y)` is the top-left corner.
    #[inline]
    pub fn from_xywh(bbox: [f64; 4]) -> Self {
        let [x, y, w, h] = bbox;
        Self::from_xyxy(x, y, x + w, y + h)
    }

    /// Converts back to `[x, y, width, height]`.
    #[inline]
    pub fn to_xywh(&self) -> [f64; 4] {
        [self.x1, self.y1, self.width(), self.height()]
    }

    /// May be negative if the box is malformed (x2 < x1).
    #[inline]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// May be negative if the box is malformed (y2 < y1).
    #[inline]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns true if all coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }

    /// Returns true if the box is properly ordered (x1 <= x2 and y1 <= y2).
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Clamps all coordinates into [0, max_w] x [0, max_h].
    #[inline]
    pub fn clamped(&self, max_w: f64, max_h: f64) -> Self {
        Self {
            x1: self.x1.clamp(0.0, max_w),
            y1: self.y1.clamp(0.0, max_h),
            x2: self.x2.clamp(0.0, max_w),
            y2: self.y2.clamp(0.0, max_h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xywh_conversion() {
        let bbox = BBox::from_xywh([10.0, 20.0, 90.0, 60.0]);
        assert_eq!(bbox, BBox::from_xyxy(10.0, 20.0, 100.0, 80.0));
        assert_eq!(bbox.to_xywh(), [10.0, 20.0, 90.0, 60.0]);
    }

    #[test]
    fn dimensions_and_area() {
        let bbox = BBox::from_xyxy(10.0, 20.0, 100.0, 80.0);
        assert_eq!(bbox.width(), 90.0);
        assert_eq!(bbox.height(), 60.0);
        assert_eq!(bbox.area(), 5400.0);
    }

    #[test]
    fn ordering() {
        assert!(BBox::from_xyxy(10.0, 20.0, 100.0, 80.0).is_ordered());
        assert!(!BBox::from_xyxy(100.0, 80.0, 10.0, 20.0).is_ordered());
    }

    #[test]
    fn finiteness() {
        assert!(BBox::from_xyxy(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!BBox::from_xyxy(f64::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!BBox::from_xyxy(0.0, 0.0, f64::INFINITY, 1.0).is_finite());
    }

    #[test]
    fn clamp_bounds_coordinates() {
        let bbox = BBox::from_xyxy(-5.0, 10.0, 70.0, 80.0).clamped(64.0, 64.0);
        assert_eq!(bbox, BBox::from_xyxy(0.0, 10.0, 64.0, 64.0));
    }
}
