//! Easel canvas crate.
//!
//! A retained-mode 2D drawing facade: any thread queues shape tasks against
//! a shared scene, a dedicated UI thread repaints that scene into a window.
//! `Canvas::init` brings the window up; the handle it returns carries the
//! drawing entry points, `clear` and the synchronous `render`.

pub mod canvas;
pub mod geometry;
pub mod images;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;

mod device;
mod window;

pub use canvas::{Canvas, CanvasConfig, CanvasError};
pub use geometry::Point;
pub use images::{CanvasImage, ImageLoadError, load_image};
pub use input::{ClickEvent, ClickHandler, PointerButton};
pub use logging::{LoggingConfig, init_logging};
pub use paint::Color;
