use tiny_skia::{
    FillRule, FilterQuality, LineCap as SkiaLineCap, Paint, Path, PathBuilder, PixmapMut,
    PixmapPaint, PixmapRef, Rect as SkiaRect, Stroke, Transform,
};

use crate::geometry::{Point, RectArea};
use crate::images::CanvasImage;
use crate::paint::{Color, LineCap, PenSpec};
use crate::render::surface::Surface;
use crate::text::FontStore;

/// CPU rasterizer for one frame's pixel buffer.
///
/// Geometry arrives in logical canvas units; the base transform scales it to
/// physical pixels, so strokes and glyphs stay crisp under DPI scaling.
/// Stroke widths are in logical units too (stroking happens before the
/// transform is applied). All drawing is anti-aliased; the pixel buffer is
/// premultiplied RGBA8.
pub struct RasterSurface<'a> {
    pixmap: PixmapMut<'a>,
    font: Option<&'a FontStore>,
    /// Physical pixels per logical unit.
    scale: f32,
    /// Transform stack; the top is the active logical-to-device mapping.
    /// The bottom entry (base scale) is never popped.
    transforms: Vec<Transform>,
}

impl<'a> RasterSurface<'a> {
    pub fn new(pixmap: PixmapMut<'a>, scale: f32, font: Option<&'a FontStore>) -> Self {
        Self {
            pixmap,
            font,
            scale,
            transforms: vec![Transform::from_scale(scale, scale)],
        }
    }

    #[inline]
    fn transform(&self) -> Transform {
        self.transforms.last().copied().unwrap_or_default()
    }

    fn solid_paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        paint
    }

    fn stroke_for(pen: &PenSpec) -> Stroke {
        Stroke {
            width: pen.thickness as f32,
            line_cap: match pen.cap {
                LineCap::Butt => SkiaLineCap::Butt,
                LineCap::Round => SkiaLineCap::Round,
                LineCap::Square => SkiaLineCap::Square,
            },
            ..Stroke::default()
        }
    }

    fn fill_with(&mut self, path: &Path, color: Color) {
        let t = self.transform();
        self.pixmap
            .fill_path(path, &Self::solid_paint(color), FillRule::Winding, t, None);
    }

    fn stroke_with(&mut self, path: &Path, pen: &PenSpec) {
        if pen.thickness <= 0.0 {
            return;
        }
        let t = self.transform();
        self.pixmap
            .stroke_path(path, &Self::solid_paint(pen.color), &Self::stroke_for(pen), t, None);
    }

    /// Blends one glyph coverage bitmap at physical pixel position.
    fn blend_glyph(
        &mut self,
        left: i32,
        top: i32,
        width: usize,
        height: usize,
        coverage: &[u8],
        color: Color,
    ) {
        let pw = self.pixmap.width() as i32;
        let ph = self.pixmap.height() as i32;
        let data = self.pixmap.data_mut();

        for row in 0..height {
            let py = top + row as i32;
            if py < 0 || py >= ph {
                continue;
            }
            for col in 0..width {
                let px = left + col as i32;
                if px < 0 || px >= pw {
                    continue;
                }
                let cov = coverage[row * width + col];
                if cov == 0 {
                    continue;
                }

                // Source-over in premultiplied space.
                let ea = (color.a as u32 * cov as u32 + 127) / 255;
                if ea == 0 {
                    continue;
                }
                let inv = 255 - ea;
                let idx = (py as usize * pw as usize + px as usize) * 4;
                data[idx] = ((color.r as u32 * ea + data[idx] as u32 * inv + 127) / 255) as u8;
                data[idx + 1] =
                    ((color.g as u32 * ea + data[idx + 1] as u32 * inv + 127) / 255) as u8;
                data[idx + 2] =
                    ((color.b as u32 * ea + data[idx + 2] as u32 * inv + 127) / 255) as u8;
                data[idx + 3] = (ea + (data[idx + 3] as u32 * inv + 127) / 255) as u8;
            }
        }
    }
}

impl Surface for RasterSurface<'_> {
    fn stroke_line(&mut self, start: Point, end: Point, pen: &PenSpec) {
        let mut pb = PathBuilder::new();
        pb.move_to(start.x as f32, start.y as f32);
        pb.line_to(end.x as f32, end.y as f32);
        let Some(path) = pb.finish() else { return };
        self.stroke_with(&path, pen);
    }

    fn draw_rect(&mut self, area: RectArea, pen: &PenSpec, fill: Option<Color>) {
        let Some(rect) = SkiaRect::from_ltrb(
            area.top_left.x as f32,
            area.top_left.y as f32,
            area.bottom_right.x as f32,
            area.bottom_right.y as f32,
        ) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);

        if let Some(color) = fill {
            self.fill_with(&path, color);
        }
        self.stroke_with(&path, pen);
    }

    fn draw_ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        pen: &PenSpec,
        fill: Option<Color>,
    ) {
        let Some(rect) = SkiaRect::from_xywh(
            (center.x - radius_x) as f32,
            (center.y - radius_y) as f32,
            (radius_x * 2.0) as f32,
            (radius_y * 2.0) as f32,
        ) else {
            return;
        };
        let Some(path) = PathBuilder::from_oval(rect) else { return };

        if let Some(color) = fill {
            self.fill_with(&path, color);
        }
        self.stroke_with(&path, pen);
    }

    fn fill_text(&mut self, origin: Point, text: &str, size: f64, color: Color) {
        let Some(font) = self.font else {
            log::debug!("text task skipped: no font loaded");
            return;
        };

        // Lay out in physical pixels so hinting matches the surface.
        let scale = self.scale as f64;
        let glyphs = font.rasterize(
            text,
            (size * scale) as f32,
            (origin.x * scale) as f32,
            (origin.y * scale) as f32,
        );

        for g in glyphs {
            let left = g.x.round() as i32;
            let top = g.y.round() as i32;
            self.blend_glyph(left, top, g.width, g.height, &g.coverage, color);
        }
    }

    fn draw_polygon(&mut self, points: &[Point], pen: &PenSpec, fill: Option<Color>) {
        let Some(path) = build_closed_path(points) else { return };

        if let Some(color) = fill {
            self.fill_with(&path, color);
        }
        self.stroke_with(&path, pen);
    }

    fn draw_image(&mut self, image: &CanvasImage, dest: RectArea) {
        let Some(src) = PixmapRef::from_bytes(image.pixels(), image.width(), image.height())
        else {
            return;
        };

        let w = dest.width();
        let h = dest.height();
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        // Map image pixels into the destination rect, then through the active
        // transform (rotation, DPI scale).
        let local = Transform::from_scale(
            (w / image.width() as f64) as f32,
            (h / image.height() as f64) as f32,
        )
        .post_translate(dest.top_left.x as f32, dest.top_left.y as f32);
        let t = self.transform().pre_concat(local);

        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(0, 0, src, &paint, t, None);
    }

    fn push_rotation(&mut self, radians: f64, pivot: Point) {
        let rotation = Transform::from_rotate_at(
            radians.to_degrees() as f32,
            pivot.x as f32,
            pivot.y as f32,
        );
        let combined = self.transform().pre_concat(rotation);
        self.transforms.push(combined);
    }

    fn pop_transform(&mut self) {
        // The base scale entry always survives unbalanced pops.
        if self.transforms.len() > 1 {
            self.transforms.pop();
        }
    }
}

/// Polygon path through `points`, closed back to the first point.
fn build_closed_path(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;

    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::TransformScope;
    use tiny_skia::Pixmap;

    fn pen(color: Color, thickness: f64) -> PenSpec {
        PenSpec::new(color, thickness)
    }

    fn alpha_at(pixmap: &Pixmap, x: u32, y: u32) -> u8 {
        pixmap.pixel(x, y).map(|p| p.alpha()).unwrap_or(0)
    }

    // ── fills and strokes ─────────────────────────────────────────────────

    #[test]
    fn rect_fill_covers_interior() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 1.0, None);
            surface.draw_rect(
                RectArea::new(Point::new(10.0, 10.0), Point::new(30.0, 30.0)),
                &pen(Color::RED, 1.0),
                Some(Color::BLUE),
            );
        }

        let inside = pixmap.pixel(20, 20).unwrap();
        assert_eq!(inside.blue(), 255);
        assert_eq!(inside.alpha(), 255);
        assert_eq!(alpha_at(&pixmap, 5, 5), 0);
    }

    #[test]
    fn rect_without_fill_leaves_interior_empty() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 1.0, None);
            surface.draw_rect(
                RectArea::new(Point::new(10.0, 10.0), Point::new(30.0, 30.0)),
                &pen(Color::BLACK, 2.0),
                None,
            );
        }

        assert_eq!(alpha_at(&pixmap, 20, 20), 0);
        assert!(alpha_at(&pixmap, 10, 20) > 0, "outline pixel missing");
    }

    #[test]
    fn line_stroke_passes_through_midpoint() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 1.0, None);
            surface.stroke_line(Point::new(0.0, 20.0), Point::new(40.0, 20.0), &pen(Color::BLACK, 3.0));
        }

        assert!(alpha_at(&pixmap, 20, 20) > 0);
        assert_eq!(alpha_at(&pixmap, 20, 5), 0);
    }

    #[test]
    fn ellipse_fill_covers_center() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 1.0, None);
            surface.draw_ellipse(Point::new(20.0, 20.0), 10.0, 6.0, &pen(Color::BLACK, 1.0), Some(Color::GREEN));
        }

        assert!(alpha_at(&pixmap, 20, 20) > 0);
        // Outside the vertical radius.
        assert_eq!(alpha_at(&pixmap, 20, 10), 0);
    }

    #[test]
    fn polygon_fill_covers_interior() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 1.0, None);
            surface.draw_polygon(
                &[Point::new(10.0, 30.0), Point::new(20.0, 10.0), Point::new(30.0, 30.0)],
                &pen(Color::BLACK, 1.0),
                Some(Color::RED),
            );
        }

        assert!(alpha_at(&pixmap, 20, 25) > 0);
        assert_eq!(alpha_at(&pixmap, 5, 5), 0);
    }

    #[test]
    fn polygon_strokes_the_implied_closing_edge() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 1.0, None);
            // Open triangle: the edge (30,30) -> (10,30) is never supplied.
            surface.draw_polygon(
                &[Point::new(10.0, 30.0), Point::new(20.0, 10.0), Point::new(30.0, 30.0)],
                &pen(Color::BLACK, 2.0),
                None,
            );
        }

        assert!(alpha_at(&pixmap, 20, 30) > 0, "closing edge not stroked");
        assert_eq!(alpha_at(&pixmap, 20, 25), 0, "interior should stay unfilled");
    }

    // ── dpi scale ─────────────────────────────────────────────────────────

    #[test]
    fn base_scale_maps_logical_to_physical() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 2.0, None);
            surface.draw_rect(
                RectArea::new(Point::new(2.0, 2.0), Point::new(10.0, 10.0)),
                &pen(Color::BLACK, 1.0),
                Some(Color::BLUE),
            );
        }

        // Logical (2..10) becomes physical (4..20).
        assert!(alpha_at(&pixmap, 18, 18) > 0);
        assert_eq!(alpha_at(&pixmap, 2, 2), 0);
    }

    // ── images and transforms ─────────────────────────────────────────────

    fn solid_image(w: u32, h: u32, color: Color) -> CanvasImage {
        let px = [color.r, color.g, color.b, color.a];
        let data: Vec<u8> = px.iter().copied().cycle().take((w * h * 4) as usize).collect();
        CanvasImage::from_rgba8(w, h, data).unwrap()
    }

    #[test]
    fn image_draws_into_dest_rect() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        let image = solid_image(4, 4, Color::RED);
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 1.0, None);
            surface.draw_image(&image, RectArea::new(Point::new(10.0, 10.0), Point::new(20.0, 20.0)));
        }

        let inside = pixmap.pixel(15, 15).unwrap();
        assert!(inside.red() > 200);
        assert_eq!(alpha_at(&pixmap, 30, 30), 0);
    }

    #[test]
    fn rotation_scope_moves_the_draw_and_restores() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        let image = solid_image(4, 4, Color::RED);
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 1.0, None);

            {
                // Half turn about (20, 20): dest (4,4)-(12,12) lands at (28,28)-(36,36).
                let mut scoped = TransformScope::rotate(
                    &mut surface,
                    std::f64::consts::PI,
                    Point::new(20.0, 20.0),
                );
                scoped.draw_image(&image, RectArea::new(Point::new(4.0, 4.0), Point::new(12.0, 12.0)));
            }

            // Scope dropped: this draw must land unrotated.
            surface.draw_image(&image, RectArea::new(Point::new(0.0, 0.0), Point::new(4.0, 4.0)));
        }

        assert!(alpha_at(&pixmap, 32, 32) > 0, "rotated image missing");
        assert_eq!(alpha_at(&pixmap, 8, 8), 0, "image drawn unrotated");
        assert!(alpha_at(&pixmap, 2, 2) > 0, "transform not restored");
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn text_without_font_is_a_no_op() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 1.0, None);
            surface.fill_text(Point::new(5.0, 5.0), "hello", 16.0, Color::BLACK);
        }
        assert!(pixmap.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn text_with_font_marks_pixels() {
        let Some(store) = crate::text::FontStore::from_system_fonts() else { return };

        let mut pixmap = Pixmap::new(100, 40).unwrap();
        {
            let mut surface = RasterSurface::new(pixmap.as_mut(), 1.0, Some(&store));
            surface.fill_text(Point::new(2.0, 2.0), "Hg", 20.0, Color::BLACK);
        }
        assert!(pixmap.data().iter().any(|&b| b != 0));
    }
}
