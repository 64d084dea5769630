//! Retained scene types.
//!
//! Responsibilities:
//! - surface-agnostic draw tasks, one variant per shape kind
//! - the lock-protected task list shared across threads
//!   (insertion order = paint order; later tasks paint over earlier ones)
//! - shape payload definitions isolated per file under `scene::shapes`

mod list;
mod task;

pub mod shapes;

pub use list::TaskList;
pub use task::DrawTask;
