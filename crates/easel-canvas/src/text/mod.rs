//! Glyph layout and rasterization for text tasks.

mod font_store;

pub use font_store::{FontLoadError, FontStore};
pub(crate) use font_store::PlacedGlyph;
