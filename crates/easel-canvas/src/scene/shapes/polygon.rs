use crate::geometry::Point;
use crate::paint::{Color, PenSpec};

/// Closed polygon payload.
///
/// The figure is always rendered closed: the path joins the last point back
/// to the first whether or not the caller repeated it. The interior is filled
/// only when `fill` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonTask {
    pub points: Vec<Point>,
    pub pen: PenSpec,
    pub fill: Option<Color>,
}

impl PolygonTask {
    /// Minimum number of vertices for a polygon path.
    pub const MIN_POINTS: usize = 3;

    #[inline]
    pub fn new(points: Vec<Point>, pen: PenSpec, fill: Option<Color>) -> Self {
        Self { points, pen, fill }
    }
}
