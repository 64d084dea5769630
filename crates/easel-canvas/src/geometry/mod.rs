//! Canvas geometry types.
//!
//! Responsibilities:
//! - value types for positions and corner-defined rectangles
//! - the bounds/validation contract every drawing entry point runs through

mod bounds;
mod point;
mod rect;

pub use bounds::{CanvasBounds, MIN_FONT_SIZE, MIN_RADIUS, MIN_STROKE_THICKNESS};
pub use point::Point;
pub use rect::RectArea;
