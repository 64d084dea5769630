use crate::geometry::Point;
use crate::paint::{Color, PenSpec};

/// Axis-aligned ellipse payload.
///
/// Circles are not a separate task kind; a circle submits an `EllipseTask`
/// with equal radii.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseTask {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub pen: PenSpec,
    pub fill: Option<Color>,
}

impl EllipseTask {
    #[inline]
    pub fn new(
        center: Point,
        radius_x: f64,
        radius_y: f64,
        pen: PenSpec,
        fill: Option<Color>,
    ) -> Self {
        Self { center, radius_x, radius_y, pen, fill }
    }
}
