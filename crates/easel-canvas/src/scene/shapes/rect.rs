use crate::geometry::{Point, RectArea};
use crate::paint::{Color, PenSpec};

/// Rectangle payload: stroked outline plus optional interior fill.
#[derive(Debug, Clone, PartialEq)]
pub struct RectTask {
    pub top_left: Point,
    pub bottom_right: Point,
    pub pen: PenSpec,
    pub fill: Option<Color>,
}

impl RectTask {
    #[inline]
    pub fn new(top_left: Point, bottom_right: Point, pen: PenSpec, fill: Option<Color>) -> Self {
        Self { top_left, bottom_right, pen, fill }
    }

    #[inline]
    pub fn area(&self) -> RectArea {
        RectArea::new(self.top_left, self.bottom_right)
    }
}
