use core::ops::{Deref, DerefMut};

use crate::geometry::{Point, RectArea};
use crate::images::CanvasImage;
use crate::paint::{Color, PenSpec};

/// Drawing-surface capability that draw tasks render against.
///
/// Implementations materialize pens from [`PenSpec`] per draw call; realized
/// stroke objects are never cached across the caller/render thread boundary.
/// All coordinates are logical canvas units.
pub trait Surface {
    /// Strokes a straight segment from `start` to `end`.
    fn stroke_line(&mut self, start: Point, end: Point, pen: &PenSpec);

    /// Strokes a rectangle outline and optionally fills its interior.
    fn draw_rect(&mut self, area: RectArea, pen: &PenSpec, fill: Option<Color>);

    /// Strokes an axis-aligned ellipse outline and optionally fills it.
    fn draw_ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        pen: &PenSpec,
        fill: Option<Color>,
    );

    /// Paints filled glyphs for `text` with its top-left corner at `origin`.
    fn fill_text(&mut self, origin: Point, text: &str, size: f64, color: Color);

    /// Strokes a closed polygon through `points` and optionally fills it.
    ///
    /// The path always closes back to the first point regardless of whether
    /// the caller repeated it.
    fn draw_polygon(&mut self, points: &[Point], pen: &PenSpec, fill: Option<Color>);

    /// Composites `image` scaled into `dest`.
    fn draw_image(&mut self, image: &CanvasImage, dest: RectArea);

    /// Applies a rotation about `pivot` to all subsequent draws.
    ///
    /// Must be balanced by [`pop_transform`](Self::pop_transform); use
    /// [`TransformScope`] rather than calling the pair manually.
    fn push_rotation(&mut self, radians: f64, pivot: Point);

    /// Restores the transform state saved by the matching push.
    fn pop_transform(&mut self);
}

/// Scoped transform: applies a rotation on construction and restores the
/// previous transform when dropped, on every exit path.
///
/// Derefs to the underlying [`Surface`] so draws made through the scope pick
/// up the rotation.
///
/// # Example
///
/// ```ignore
/// let mut scoped = TransformScope::rotate(surface, angle, dest.center());
/// scoped.draw_image(&image, dest);
/// // scope drops here; the transform is restored even if the draw panicked
/// ```
pub struct TransformScope<'a> {
    surface: &'a mut dyn Surface,
}

impl<'a> TransformScope<'a> {
    pub fn rotate(surface: &'a mut dyn Surface, radians: f64, pivot: Point) -> Self {
        surface.push_rotation(radians, pivot);
        Self { surface }
    }
}

impl<'a> Deref for TransformScope<'a> {
    type Target = dyn Surface + 'a;

    fn deref(&self) -> &Self::Target {
        self.surface
    }
}

impl<'a> DerefMut for TransformScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surface
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.surface.pop_transform();
    }
}
