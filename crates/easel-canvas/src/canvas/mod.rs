//! Public canvas facade.
//!
//! Responsibilities:
//! - window bring-up (`Canvas::init`) with the bounded readiness wait
//! - the validated drawing entry points (delegating to the headless state)
//! - the synchronous render call and the clear/reset operation
//! - the single-live-canvas latch and shutdown on drop

mod config;
mod error;
mod state;

pub use config::CanvasConfig;
pub use error::CanvasError;

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use self::state::CanvasState;
use crate::geometry::Point;
use crate::images::CanvasImage;
use crate::paint::Color;
use crate::window::lifecycle::{WaitOutcome, WindowShared};
use crate::window::runtime::{RuntimeConfig, spawn_ui_thread};

/// One live canvas window per process; freed when the last handle drops.
static LIVE: AtomicBool = AtomicBool::new(false);

/// Handle to the canvas window.
///
/// Cheap to clone; clones share the same scene and window. The window closes
/// when the last clone is dropped (or earlier, if the user closes it).
/// Dropped-window state is not an error: draws keep accumulating in the
/// scene and `render` reports `false`.
#[derive(Clone)]
pub struct Canvas {
    state: CanvasState,
    shared: Arc<WindowShared>,
    render_timeout: Duration,
    width: u32,
    height: u32,
    _owner: Arc<OwnerGuard>,
}

/// Held by every `Canvas` clone; the drop of the last one tears the window
/// down and releases the process latch.
struct OwnerGuard {
    shared: Arc<WindowShared>,
}

impl Drop for OwnerGuard {
    fn drop(&mut self) {
        self.shared.mark_shutdown();
        if let Some(link) = self.shared.gate.ready_payload() {
            // Wake the parked loop so it observes the shutdown.
            link.window.request_redraw();
        }
        LIVE.store(false, Ordering::Release);
        log::debug!("last canvas handle dropped, window shutting down");
    }
}

impl Canvas {
    /// Brings up the window and returns the drawing handle.
    ///
    /// Spawns the UI thread, blocks on the readiness handshake for at most
    /// `config.startup_timeout`, then seeds the background scene. While one
    /// canvas is live, further calls fail with
    /// [`CanvasError::AlreadyInitialized`]; the slot frees when the last
    /// handle drops, even after a failed init.
    pub fn init(config: CanvasConfig) -> Result<Self, CanvasError> {
        if cfg!(target_os = "macos") {
            // AppKit insists on owning the main thread; the background-loop
            // design cannot satisfy that.
            return Err(CanvasError::UnsupportedPlatform);
        }

        if LIVE.swap(true, Ordering::AcqRel) {
            log::warn!("canvas already initialized, ignoring duplicate init");
            return Err(CanvasError::AlreadyInitialized);
        }

        let CanvasConfig {
            width,
            height,
            title,
            on_click,
            startup_timeout,
            render_timeout,
        } = config;

        let state = CanvasState::new(width, height);
        let shared = Arc::new(WindowShared::new());

        let spawned = spawn_ui_thread(
            RuntimeConfig {
                width,
                height,
                title,
            },
            Arc::clone(state.tasks()),
            Arc::clone(&shared),
            on_click,
        );
        if let Err(err) = spawned {
            LIVE.store(false, Ordering::Release);
            return Err(CanvasError::Bootstrap(format!(
                "failed to spawn the UI thread: {err}"
            )));
        }

        match shared.gate.wait_ready(startup_timeout) {
            WaitOutcome::Ready(_) => {}
            WaitOutcome::Failed(reason) => {
                LIVE.store(false, Ordering::Release);
                return Err(CanvasError::Bootstrap(reason));
            }
            WaitOutcome::TimedOut => {
                shared.mark_shutdown();
                LIVE.store(false, Ordering::Release);
                return Err(CanvasError::StartupTimeout);
            }
            WaitOutcome::Closed => {
                LIVE.store(false, Ordering::Release);
                return Err(CanvasError::Bootstrap(
                    "window closed during startup".to_string(),
                ));
            }
        }

        let canvas = Self {
            state,
            shared: Arc::clone(&shared),
            render_timeout,
            width,
            height,
            _owner: Arc::new(OwnerGuard { shared }),
        };
        canvas.clear();
        log::info!("canvas ready at {width}x{height}");
        Ok(canvas)
    }

    /// Configured logical width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Configured logical height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the window is up and has not been closed.
    pub fn is_open(&self) -> bool {
        self.shared.gate.ready_payload().is_some() && !self.shared.is_shutdown()
    }

    /// Queues a line. `color` defaults to black.
    pub fn draw_line(&self, start: Point, end: Point, thickness: f64, color: Option<Color>) -> bool {
        self.state.draw_line(start, end, thickness, color)
    }

    /// Queues a rectangle. Corners must be strictly ordered (`top_left`
    /// left of and above `bottom_right`); `stroke` defaults to black, no
    /// fill unless given.
    pub fn draw_rectangle(
        &self,
        top_left: Point,
        bottom_right: Point,
        thickness: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
    ) -> bool {
        self.state
            .draw_rectangle(top_left, bottom_right, thickness, stroke, fill)
    }

    /// Queues an ellipse centered at `center` with the given half-axes.
    pub fn draw_ellipse(
        &self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        thickness: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
    ) -> bool {
        self.state
            .draw_ellipse(center, radius_x, radius_y, thickness, stroke, fill)
    }

    /// Queues a circle; shorthand for [`draw_ellipse`](Self::draw_ellipse)
    /// with equal radii.
    pub fn draw_circle(
        &self,
        center: Point,
        radius: f64,
        thickness: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
    ) -> bool {
        self.state.draw_circle(center, radius, thickness, stroke, fill)
    }

    /// Queues a text block with its top-left corner at `origin`. Empty or
    /// whitespace-only text succeeds without queueing anything.
    pub fn draw_text(&self, origin: Point, text: &str, size: f64, color: Option<Color>) -> bool {
        self.state.draw_text(origin, text, size, color)
    }

    /// Queues a closed polygon through `points` (at least three). The path
    /// closes back to the first point regardless of the input.
    pub fn draw_polygon(
        &self,
        points: &[Point],
        thickness: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
    ) -> bool {
        self.state.draw_polygon(points, thickness, stroke, fill)
    }

    /// Queues an image stretched into the given rectangle, rotated by
    /// `rotation_degrees` (clamped to `[0, 360]`) about the rectangle's
    /// center.
    pub fn draw_image(
        &self,
        image: &CanvasImage,
        top_left: Point,
        bottom_right: Point,
        rotation_degrees: f64,
    ) -> bool {
        self.state
            .draw_image(image, top_left, bottom_right, rotation_degrees)
    }

    /// Loads an image from `path` and queues it like
    /// [`draw_image`](Self::draw_image). A failed load logs a warning and
    /// returns `false`.
    pub fn draw_image_file(
        &self,
        path: impl AsRef<Path>,
        top_left: Point,
        bottom_right: Point,
        rotation_degrees: f64,
    ) -> bool {
        self.state
            .draw_image_file(path, top_left, bottom_right, rotation_degrees)
    }

    /// Empties the scene and re-seeds the full-canvas background (gray
    /// outline, white fill).
    pub fn clear(&self) {
        self.state.clear();
    }

    /// Requests a repaint and waits until the presented frame includes every
    /// draw issued before this call.
    ///
    /// Returns `false` with a warning when the window is not up, was closed,
    /// or the frame misses the render budget. Called from the click callback
    /// (already on the UI thread) it only queues the repaint and returns
    /// `true`; blocking there would stall the very loop that services it.
    pub fn render(&self) -> bool {
        let Some(link) = self.shared.gate.ready_payload() else {
            if self.shared.gate.is_closed() {
                log::warn!("render skipped, the window was closed");
            } else {
                log::warn!("render skipped, the window is not ready");
            }
            return false;
        };
        if self.shared.is_shutdown() {
            log::warn!("render skipped, the window is shutting down");
            return false;
        }

        if self.shared.is_ui_thread() {
            link.window.request_redraw();
            return true;
        }

        // Overlapping render calls queue here instead of interleaving.
        let _serial = self
            .shared
            .render_serial
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let observed = self.shared.frames.current();
        link.window.request_redraw();
        let completed = self.shared.frames.wait_past(observed, self.render_timeout);
        if !completed {
            log::warn!("render timed out after {:?}", self.render_timeout);
        }
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A handle with no UI thread behind it; the gate stays wherever the
    /// test puts it.
    fn headless(shared: Arc<WindowShared>) -> Canvas {
        Canvas {
            state: CanvasState::new(400, 400),
            shared: Arc::clone(&shared),
            render_timeout: Duration::from_millis(50),
            width: 400,
            height: 400,
            _owner: Arc::new(OwnerGuard { shared }),
        }
    }

    // ── render without a live window ─────────────────────────────────────

    #[test]
    fn render_before_ready_reports_false() {
        let canvas = headless(Arc::new(WindowShared::new()));
        assert!(!canvas.render());
        assert!(!canvas.is_open());
    }

    #[test]
    fn render_after_close_reports_false_while_draws_still_queue() {
        let shared = Arc::new(WindowShared::new());
        shared.gate.signal_closed();
        let canvas = headless(shared);

        assert!(canvas.draw_line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 1.0, None));
        assert!(!canvas.render());
        assert!(!canvas.is_open());
    }

    #[test]
    fn configured_size_is_reported_back() {
        let canvas = headless(Arc::new(WindowShared::new()));
        assert_eq!(canvas.width(), 400);
        assert_eq!(canvas.height(), 400);
    }
}
