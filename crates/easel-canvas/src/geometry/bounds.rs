use super::Point;

/// Minimum stroke thickness accepted by the drawing entry points.
pub const MIN_STROKE_THICKNESS: f64 = 0.1;

/// Minimum ellipse radius accepted by the drawing entry points.
pub const MIN_RADIUS: f64 = 0.1;

/// Minimum font size accepted by the text entry point.
pub const MIN_FONT_SIZE: f64 = 4.0;

/// Fixed canvas extents, in logical units.
///
/// Owns the validation contract shared by every drawing entry point: points
/// must lie inside `[0, width] x [0, height]` (edges inclusive), rectangles
/// must have strictly ordered corners, and stroke/radius/font parameters must
/// meet the module minimums. Validation failures are reported as `false` and
/// never panic; NaN coordinates fail every comparison and are rejected the
/// same way.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` iff the point lies inside the canvas, edges inclusive.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Logical AND of [`contains_point`](Self::contains_point) over all points.
    #[inline]
    pub fn contains_all(&self, points: &[Point]) -> bool {
        points.iter().all(|&p| self.contains_point(p))
    }

    /// Validates a corner-defined rectangle.
    ///
    /// Both corners must be in bounds and strictly ordered
    /// (`top_left.x < bottom_right.x`, `top_left.y < bottom_right.y`).
    /// Inverted or degenerate rectangles are rejected, not normalized.
    #[inline]
    pub fn validate_rect(&self, top_left: Point, bottom_right: Point) -> bool {
        self.contains_point(top_left)
            && self.contains_point(bottom_right)
            && top_left.x < bottom_right.x
            && top_left.y < bottom_right.y
    }

    /// Validates an ellipse by its center and radii.
    ///
    /// Radii must meet [`MIN_RADIUS`]; containment is probed at the center and
    /// the four points offset by half of each radius per axis, so an ellipse
    /// may legally overhang the canvas edge by up to half its extent.
    pub fn validate_ellipse(&self, center: Point, radius_x: f64, radius_y: f64) -> bool {
        if radius_x < MIN_RADIUS || radius_y < MIN_RADIUS {
            return false;
        }

        let half_x = radius_x * 0.5;
        let half_y = radius_y * 0.5;
        let probes = [
            center,
            Point::new(center.x - half_x, center.y),
            Point::new(center.x + half_x, center.y),
            Point::new(center.x, center.y - half_y),
            Point::new(center.x, center.y + half_y),
        ];

        self.contains_all(&probes)
    }

    #[inline]
    pub fn validate_thickness(&self, thickness: f64) -> bool {
        thickness >= MIN_STROKE_THICKNESS
    }

    #[inline]
    pub fn validate_font_size(&self, size: f64) -> bool {
        size >= MIN_FONT_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b() -> CanvasBounds {
        CanvasBounds::new(400.0, 300.0)
    }

    // ── contains_point ────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(b().contains_point(Point::new(200.0, 150.0)));
    }

    #[test]
    fn contains_edges_inclusive() {
        assert!(b().contains_point(Point::new(0.0, 0.0)));
        assert!(b().contains_point(Point::new(400.0, 300.0)));
        assert!(b().contains_point(Point::new(400.0, 0.0)));
        assert!(b().contains_point(Point::new(0.0, 300.0)));
    }

    #[test]
    fn rejects_negative_coordinates() {
        assert!(!b().contains_point(Point::new(-0.1, 10.0)));
        assert!(!b().contains_point(Point::new(10.0, -0.1)));
    }

    #[test]
    fn rejects_beyond_extents() {
        assert!(!b().contains_point(Point::new(400.1, 10.0)));
        assert!(!b().contains_point(Point::new(10.0, 300.1)));
    }

    #[test]
    fn rejects_nan() {
        assert!(!b().contains_point(Point::new(f64::NAN, 10.0)));
        assert!(!b().contains_point(Point::new(10.0, f64::NAN)));
    }

    // ── contains_all ──────────────────────────────────────────────────────

    #[test]
    fn contains_all_is_conjunction() {
        let inside = Point::new(1.0, 1.0);
        let outside = Point::new(-1.0, 1.0);
        assert!(b().contains_all(&[inside, inside]));
        assert!(!b().contains_all(&[inside, outside]));
    }

    // ── validate_rect ─────────────────────────────────────────────────────

    #[test]
    fn rect_ordered_corners_pass() {
        assert!(b().validate_rect(Point::new(10.0, 10.0), Point::new(50.0, 40.0)));
    }

    #[test]
    fn rect_inverted_corners_fail_even_in_bounds() {
        // Both points are valid positions on their own; the ordering rule
        // still rejects the pair.
        assert!(!b().validate_rect(Point::new(10.0, 10.0), Point::new(5.0, 5.0)));
    }

    #[test]
    fn rect_degenerate_fails() {
        assert!(!b().validate_rect(Point::new(10.0, 10.0), Point::new(10.0, 40.0)));
        assert!(!b().validate_rect(Point::new(10.0, 10.0), Point::new(40.0, 10.0)));
    }

    #[test]
    fn rect_out_of_bounds_corner_fails() {
        assert!(!b().validate_rect(Point::new(10.0, 10.0), Point::new(450.0, 40.0)));
    }

    // ── validate_ellipse ──────────────────────────────────────────────────

    #[test]
    fn ellipse_in_bounds_passes() {
        assert!(b().validate_ellipse(Point::new(200.0, 150.0), 50.0, 30.0));
    }

    #[test]
    fn ellipse_sub_minimum_radius_fails() {
        assert!(!b().validate_ellipse(Point::new(200.0, 150.0), 0.05, 30.0));
        assert!(!b().validate_ellipse(Point::new(200.0, 150.0), 50.0, 0.05));
    }

    #[test]
    fn ellipse_probes_at_half_radius() {
        // Center 30 from the edge: radius 60 keeps the half-radius probe
        // inside; radius 80 pushes it out.
        assert!(b().validate_ellipse(Point::new(30.0, 150.0), 60.0, 30.0));
        assert!(!b().validate_ellipse(Point::new(30.0, 150.0), 80.0, 30.0));
    }

    #[test]
    fn ellipse_center_out_of_bounds_fails() {
        assert!(!b().validate_ellipse(Point::new(-10.0, 150.0), 5.0, 5.0));
    }

    // ── parameter minimums ────────────────────────────────────────────────

    #[test]
    fn thickness_minimum() {
        assert!(b().validate_thickness(0.1));
        assert!(b().validate_thickness(1.0));
        assert!(!b().validate_thickness(0.05));
    }

    #[test]
    fn font_size_minimum() {
        assert!(b().validate_font_size(4.0));
        assert!(!b().validate_font_size(3.9));
    }
}
