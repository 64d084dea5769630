use crate::geometry::Point;
use crate::paint::PenSpec;

/// Straight segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTask {
    pub start: Point,
    pub end: Point,
    pub pen: PenSpec,
}

impl LineTask {
    #[inline]
    pub fn new(start: Point, end: Point, pen: PenSpec) -> Self {
        Self { start, end, pen }
    }
}
