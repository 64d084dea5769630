//! Image decoding and the opaque image handle used by image draw tasks.

mod loader;

pub use loader::{load_image, CanvasImage, ImageLoadError};
