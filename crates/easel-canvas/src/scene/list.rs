use std::sync::{Mutex, MutexGuard};

use crate::geometry::{CanvasBounds, Point};
use crate::paint::{Color, PenSpec};
use crate::scene::shapes::RectTask;
use crate::scene::task::DrawTask;

/// Lock-protected, ordered draw stream shared between caller threads
/// (producers) and the render thread (consumer).
///
/// Insertion order is paint order: later tasks paint over earlier ones.
///
/// Critical sections only touch the vec. No I/O, no toolkit calls, no
/// rendering ever happens under the lock; the render thread takes a
/// [`snapshot`](Self::snapshot) and paints outside it, so producers never
/// block on rendering latency.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Mutex<Vec<DrawTask>>,
}

impl TaskList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one task to the end of the stream.
    pub fn append(&self, task: DrawTask) {
        self.locked().push(task);
    }

    /// Empties the stream and re-seeds the full-canvas background rectangle
    /// (gray stroke, white fill) within the same critical section.
    ///
    /// The background keeps the window covered by a painted surface, so
    /// pointer events always have something to land on.
    pub fn clear_to_background(&self, bounds: CanvasBounds) {
        let background = background_task(bounds);
        let mut tasks = self.locked();
        tasks.clear();
        tasks.push(background);
    }

    /// Point-in-time copy of the stream for rendering outside the lock.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DrawTask> {
        self.locked().clone()
    }

    pub fn len(&self) -> usize {
        self.locked().len()
    }

    fn locked(&self) -> MutexGuard<'_, Vec<DrawTask>> {
        // A poisoned lock only records that some thread panicked mid-append;
        // the vec itself is still structurally sound, so keep serving.
        self.tasks.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// The rectangle `clear` re-seeds: canvas-sized, gray stroke, white fill.
fn background_task(bounds: CanvasBounds) -> DrawTask {
    DrawTask::Rect(RectTask::new(
        Point::zero(),
        Point::new(bounds.width, bounds.height),
        PenSpec::new(Color::GRAY, PenSpec::DEFAULT_THICKNESS),
        Some(Color::WHITE),
    ))
}
