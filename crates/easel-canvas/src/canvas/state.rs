use std::path::Path;
use std::sync::Arc;

use crate::geometry::{CanvasBounds, Point};
use crate::images::{CanvasImage, load_image};
use crate::paint::{Color, PenSpec};
use crate::scene::shapes::{EllipseTask, ImageTask, LineTask, PolygonTask, RectTask, TextTask};
use crate::scene::{DrawTask, TaskList};

/// Validated drawing surface: bounds plus the shared scene.
///
/// Holds no window state, so every entry point works headless. The windowed
/// facade delegates here; rejected calls leave the scene untouched and
/// return `false`.
#[derive(Clone)]
pub(crate) struct CanvasState {
    bounds: CanvasBounds,
    tasks: Arc<TaskList>,
}

impl CanvasState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bounds: CanvasBounds::new(f64::from(width), f64::from(height)),
            tasks: Arc::new(TaskList::new()),
        }
    }

    pub fn tasks(&self) -> &Arc<TaskList> {
        &self.tasks
    }

    pub fn draw_line(&self, start: Point, end: Point, thickness: f64, color: Option<Color>) -> bool {
        if !self.bounds.contains_all(&[start, end]) || !self.bounds.validate_thickness(thickness) {
            log::debug!("rejected line {start:?} -> {end:?} (thickness {thickness})");
            return false;
        }
        let pen = PenSpec::new(color.unwrap_or(Color::BLACK), thickness);
        self.tasks.append(DrawTask::Line(LineTask::new(start, end, pen)));
        true
    }

    pub fn draw_rectangle(
        &self,
        top_left: Point,
        bottom_right: Point,
        thickness: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
    ) -> bool {
        if !self.bounds.validate_rect(top_left, bottom_right)
            || !self.bounds.validate_thickness(thickness)
        {
            log::debug!("rejected rectangle {top_left:?} -> {bottom_right:?}");
            return false;
        }
        let pen = PenSpec::new(stroke.unwrap_or(Color::BLACK), thickness);
        self.tasks
            .append(DrawTask::Rect(RectTask::new(top_left, bottom_right, pen, fill)));
        true
    }

    pub fn draw_ellipse(
        &self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        thickness: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
    ) -> bool {
        if !self.bounds.validate_ellipse(center, radius_x, radius_y)
            || !self.bounds.validate_thickness(thickness)
        {
            log::debug!("rejected ellipse at {center:?} ({radius_x} x {radius_y})");
            return false;
        }
        let pen = PenSpec::new(stroke.unwrap_or(Color::BLACK), thickness);
        self.tasks.append(DrawTask::Ellipse(EllipseTask::new(
            center, radius_x, radius_y, pen, fill,
        )));
        true
    }

    /// Sugar over [`draw_ellipse`](Self::draw_ellipse) with equal radii; the
    /// queued task is indistinguishable from the ellipse form.
    pub fn draw_circle(
        &self,
        center: Point,
        radius: f64,
        thickness: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
    ) -> bool {
        self.draw_ellipse(center, radius, radius, thickness, stroke, fill)
    }

    /// Empty or whitespace-only text succeeds without queueing anything.
    /// Validation still runs first, so invisible text at a bad origin or
    /// with a sub-minimum size is rejected like any other call.
    pub fn draw_text(&self, origin: Point, text: &str, size: f64, color: Option<Color>) -> bool {
        if !self.bounds.contains_point(origin) || !self.bounds.validate_font_size(size) {
            log::debug!("rejected text at {origin:?} (size {size})");
            return false;
        }
        if text.trim().is_empty() {
            return true;
        }
        self.tasks.append(DrawTask::Text(TextTask::new(
            origin,
            text,
            size,
            color.unwrap_or(Color::BLACK),
        )));
        true
    }

    /// The queued polygon always renders closed, filled only when `fill` is
    /// given.
    pub fn draw_polygon(
        &self,
        points: &[Point],
        thickness: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
    ) -> bool {
        if points.len() < PolygonTask::MIN_POINTS
            || !self.bounds.contains_all(points)
            || !self.bounds.validate_thickness(thickness)
        {
            log::debug!("rejected polygon with {} points", points.len());
            return false;
        }
        let pen = PenSpec::new(stroke.unwrap_or(Color::BLACK), thickness);
        self.tasks.append(DrawTask::Polygon(PolygonTask::new(
            points.to_vec(),
            pen,
            fill,
        )));
        true
    }

    /// `rotation_degrees` is clamped to `[0, 360]`; rotation happens about
    /// the destination rectangle's center at render time.
    pub fn draw_image(
        &self,
        image: &CanvasImage,
        top_left: Point,
        bottom_right: Point,
        rotation_degrees: f64,
    ) -> bool {
        if !self.bounds.validate_rect(top_left, bottom_right) {
            log::debug!("rejected image at {top_left:?} -> {bottom_right:?}");
            return false;
        }
        self.tasks.append(DrawTask::Image(ImageTask::new(
            image.clone(),
            top_left,
            bottom_right,
            rotation_degrees,
        )));
        true
    }

    /// Loads `path` and queues it like [`draw_image`](Self::draw_image).
    /// Load failures are logged and reported as `false`.
    pub fn draw_image_file(
        &self,
        path: impl AsRef<Path>,
        top_left: Point,
        bottom_right: Point,
        rotation_degrees: f64,
    ) -> bool {
        let path = path.as_ref();
        match load_image(path) {
            Ok(image) => self.draw_image(&image, top_left, bottom_right, rotation_degrees),
            Err(err) => {
                log::warn!("failed to load image '{}': {err}", path.display());
                false
            }
        }
    }

    /// Empties the scene and re-seeds the full-canvas background.
    pub fn clear(&self) {
        self.tasks.clear_to_background(self.bounds);
    }
}

// ── tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> CanvasState {
        CanvasState::new(400, 400)
    }

    // ── validation gates ─────────────────────────────────────────────────

    #[test]
    fn out_of_bounds_points_reject_every_entry_point() {
        let state = state();
        let inside = Point::new(50.0, 50.0);
        let outside = Point::new(450.0, 50.0);

        assert!(!state.draw_line(inside, outside, 1.0, None));
        assert!(!state.draw_rectangle(inside, outside, 1.0, None, None));
        assert!(!state.draw_ellipse(outside, 5.0, 5.0, 1.0, None, None));
        assert!(!state.draw_circle(outside, 5.0, 1.0, None, None));
        assert!(!state.draw_text(outside, "hi", 12.0, None));
        assert!(!state.draw_polygon(&[inside, outside, Point::new(60.0, 60.0)], 1.0, None, None));
        assert_eq!(state.tasks().len(), 0);
    }

    #[test]
    fn inverted_rectangle_rejects_even_with_in_bounds_corners() {
        let state = state();
        assert!(!state.draw_rectangle(
            Point::new(10.0, 10.0),
            Point::new(5.0, 5.0),
            1.0,
            None,
            None
        ));
        assert_eq!(state.tasks().len(), 0);
    }

    #[test]
    fn sub_minimum_thickness_rejects() {
        let state = state();
        assert!(!state.draw_line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 0.05, None));
        assert!(state.draw_line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 0.1, None));
    }

    // ── task construction ────────────────────────────────────────────────

    #[test]
    fn circle_queues_the_same_task_as_an_equal_radii_ellipse() {
        let a = state();
        let b = state();
        let center = Point::new(200.0, 200.0);

        assert!(a.draw_circle(center, 30.0, 2.0, Some(Color::RED), Some(Color::BLUE)));
        assert!(b.draw_ellipse(center, 30.0, 30.0, 2.0, Some(Color::RED), Some(Color::BLUE)));

        assert_eq!(a.tasks().snapshot(), b.tasks().snapshot());
    }

    #[test]
    fn stroke_defaults_to_black_and_fill_to_none() {
        let state = state();
        assert!(state.draw_rectangle(
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0),
            1.0,
            None,
            None
        ));

        match &state.tasks().snapshot()[0] {
            DrawTask::Rect(rect) => {
                assert_eq!(rect.pen.color, Color::BLACK);
                assert_eq!(rect.fill, None);
            }
            other => panic!("unexpected task {other:?}"),
        }
    }

    #[test]
    fn whitespace_text_succeeds_without_a_task() {
        let state = state();
        assert!(state.draw_text(Point::new(10.0, 10.0), "", 24.0, None));
        assert!(state.draw_text(Point::new(10.0, 10.0), "   \t", 24.0, None));
        assert_eq!(state.tasks().len(), 0);

        assert!(state.draw_text(Point::new(10.0, 10.0), "hello", 24.0, None));
        assert_eq!(state.tasks().len(), 1);
    }

    #[test]
    fn invisible_text_is_still_validated_first() {
        let state = state();

        // The carve-out only applies to calls that would otherwise queue.
        assert!(!state.draw_text(Point::new(450.0, 10.0), "", 24.0, None));
        assert!(!state.draw_text(Point::new(10.0, 10.0), "  ", 3.0, None));
        assert_eq!(state.tasks().len(), 0);
    }

    #[test]
    fn tiny_font_sizes_reject() {
        let state = state();
        assert!(!state.draw_text(Point::new(10.0, 10.0), "small", 3.9, None));
        assert!(state.draw_text(Point::new(10.0, 10.0), "ok", 4.0, None));
    }

    #[test]
    fn polygon_needs_three_points() {
        let state = state();
        let a = Point::new(10.0, 10.0);
        let b = Point::new(30.0, 10.0);
        let c = Point::new(20.0, 30.0);

        assert!(!state.draw_polygon(&[a, b], 1.0, None, None));
        assert!(state.draw_polygon(&[a, b, c], 1.0, None, None));
        assert_eq!(state.tasks().len(), 1);
    }

    #[test]
    fn image_task_respects_rect_validation() {
        let state = state();
        let image = CanvasImage::from_rgba8(2, 2, vec![255; 16]).unwrap();

        assert!(!state.draw_image(
            &image,
            Point::new(50.0, 50.0),
            Point::new(40.0, 60.0),
            0.0
        ));
        assert!(state.draw_image(
            &image,
            Point::new(50.0, 50.0),
            Point::new(150.0, 150.0),
            45.0
        ));
        assert_eq!(state.tasks().len(), 1);
    }

    #[test]
    fn image_file_that_does_not_exist_reports_false() {
        let state = state();
        assert!(!state.draw_image_file(
            "definitely/not/a/real/file.png",
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            0.0
        ));
        assert_eq!(state.tasks().len(), 0);
    }

    // ── scene control ────────────────────────────────────────────────────

    #[test]
    fn clear_leaves_exactly_the_background() {
        let state = state();
        state.draw_line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 1.0, None);
        state.draw_circle(Point::new(100.0, 100.0), 20.0, 1.0, None, None);

        state.clear();
        assert_eq!(state.tasks().len(), 1);
    }

    #[test]
    fn end_to_end_drawing_session() {
        let state = state();

        assert!(state.draw_line(Point::new(100.0, 100.0), Point::new(300.0, 300.0), 1.0, None));
        assert!(!state.draw_rectangle(
            Point::new(0.0, 0.0),
            Point::new(450.0, 450.0),
            1.0,
            None,
            None
        ));
        let before = state.tasks().len();
        assert!(state.draw_text(Point::new(10.0, 10.0), "", 24.0, None));
        assert_eq!(state.tasks().len(), before);

        state.clear();
        assert_eq!(state.tasks().len(), 1);
    }

    // ── concurrency ──────────────────────────────────────────────────────

    #[test]
    fn parallel_draw_calls_each_land_once() {
        const THREADS: usize = 4;
        const PER_THREAD: usize = 25;

        let state = state();
        state.clear();

        std::thread::scope(|scope| {
            for t in 0..THREADS {
                let state = state.clone();
                scope.spawn(move || {
                    for i in 0..PER_THREAD {
                        let y = (t * PER_THREAD + i) as f64;
                        assert!(state.draw_line(
                            Point::new(0.0, y),
                            Point::new(100.0, y),
                            1.0,
                            None
                        ));
                    }
                });
            }
        });

        // Every accepted call appends exactly one task, plus the background.
        assert_eq!(state.tasks().len(), THREADS * PER_THREAD + 1);
    }
}
