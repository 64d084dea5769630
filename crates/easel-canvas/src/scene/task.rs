use crate::render::{Surface, TransformScope};
use crate::scene::shapes::{EllipseTask, ImageTask, LineTask, PolygonTask, RectTask, TextTask};

/// One retained drawing operation.
///
/// The variant set is closed: rendering is an exhaustive match, so adding a
/// shape kind means
/// - a new payload module under `scene::shapes::*`
/// - a new variant here plus its `render` arm
/// - the surface primitive it paints with, if none fits
///
/// Tasks are immutable once constructed and never reference the scene or
/// other tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawTask {
    Line(LineTask),
    Rect(RectTask),
    Ellipse(EllipseTask),
    Text(TextTask),
    Polygon(PolygonTask),
    Image(ImageTask),
}

impl DrawTask {
    /// Paints this task onto `surface`.
    ///
    /// Runs on the render thread against a snapshot of the scene; the scene
    /// lock is never held here.
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            DrawTask::Line(line) => {
                surface.stroke_line(line.start, line.end, &line.pen);
            }
            DrawTask::Rect(rect) => {
                surface.draw_rect(rect.area(), &rect.pen, rect.fill);
            }
            DrawTask::Ellipse(ellipse) => {
                surface.draw_ellipse(
                    ellipse.center,
                    ellipse.radius_x,
                    ellipse.radius_y,
                    &ellipse.pen,
                    ellipse.fill,
                );
            }
            DrawTask::Text(text) => {
                surface.fill_text(text.origin, &text.text, text.size, text.color);
            }
            DrawTask::Polygon(polygon) => {
                surface.draw_polygon(&polygon.points, &polygon.pen, polygon.fill);
            }
            DrawTask::Image(image) => {
                let dest = image.dest();
                if image.rotation_radians != 0.0 {
                    let mut scoped =
                        TransformScope::rotate(surface, image.rotation_radians, dest.center());
                    scoped.draw_image(&image.image, dest);
                } else {
                    surface.draw_image(&image.image, dest);
                }
            }
        }
    }
}
