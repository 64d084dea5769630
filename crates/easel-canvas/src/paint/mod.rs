//! Stroke and fill styling.
//!
//! Responsibilities:
//! - straight-alpha RGBA color values with a small named palette
//! - pen descriptions (color + thickness + cap) kept as plain data;
//!   the drawing surface materializes the actual stroke at draw time

mod color;
mod pen;

pub use color::Color;
pub use pen::{LineCap, PenSpec};
