use super::Point;

/// Axis-aligned rectangle defined by its top-left and bottom-right corners.
///
/// Unlike an origin+size rectangle this form never normalizes: callers are
/// expected to pass corners in strict order (validated upstream), and the
/// corners are kept exactly as given so the draw stream stays faithful to
/// the submitting call.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RectArea {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl RectArea {
    #[inline]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self { top_left, bottom_right }
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    /// Center point, used as the pivot for rotated image draws.
    #[inline]
    pub fn center(self) -> Point {
        self.top_left.midpoint(self.bottom_right)
    }
}
