//! Rendering boundary.
//!
//! Responsibilities:
//! - the [`Surface`] capability draw tasks paint against
//! - scoped transform state with guaranteed restoration
//! - the CPU rasterizer backing the on-screen presentation

mod raster;
mod surface;

pub use raster::RasterSurface;
pub use surface::{Surface, TransformScope};
