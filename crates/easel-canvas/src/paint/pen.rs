use super::Color;

/// Stroke end-cap shape.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Description of a stroke: color, thickness, cap.
///
/// Only the description is stored in draw tasks; the surface builds the
/// toolkit stroke object per draw call, so no render-thread resource is ever
/// cached on the caller side of the thread boundary.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PenSpec {
    pub color: Color,
    pub thickness: f64,
    pub cap: LineCap,
}

impl PenSpec {
    /// Thickness applied when the caller does not pass one.
    pub const DEFAULT_THICKNESS: f64 = 1.0;

    #[inline]
    pub const fn new(color: Color, thickness: f64) -> Self {
        Self { color, thickness, cap: LineCap::Round }
    }

    #[inline]
    pub const fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

impl Default for PenSpec {
    /// Black, 1.0 thick, round caps.
    fn default() -> Self {
        Self::new(Color::BLACK, Self::DEFAULT_THICKNESS)
    }
}
