use crate::geometry::{Point, RectArea};
use crate::images::CanvasImage;

/// Image payload: a decoded image composited into a destination rectangle,
/// optionally rotated about the rectangle's center.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTask {
    pub image: CanvasImage,
    pub top_left: Point,
    pub bottom_right: Point,
    /// Rotation about the destination center, already converted to radians.
    pub rotation_radians: f64,
}

impl ImageTask {
    /// Builds the payload, clamping `rotation_degrees` to `[0, 360]` before
    /// converting to radians.
    #[inline]
    pub fn new(
        image: CanvasImage,
        top_left: Point,
        bottom_right: Point,
        rotation_degrees: f64,
    ) -> Self {
        let clamped = rotation_degrees.clamp(0.0, 360.0);
        Self {
            image,
            top_left,
            bottom_right,
            rotation_radians: clamped.to_radians(),
        }
    }

    #[inline]
    pub fn dest(&self) -> RectArea {
        RectArea::new(self.top_left, self.bottom_right)
    }
}
