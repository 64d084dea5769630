use crate::geometry::Point;
use crate::paint::Color;

/// Text payload: filled glyphs, no stroke.
///
/// `origin` is the top-left corner of the laid-out text block; `size` is the
/// em size in logical units.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTask {
    pub origin: Point,
    pub text: String,
    pub size: f64,
    pub color: Color,
}

impl TextTask {
    #[inline]
    pub fn new(origin: Point, text: impl Into<String>, size: f64, color: Color) -> Self {
        Self { origin, text: text.into(), size, color }
    }
}
