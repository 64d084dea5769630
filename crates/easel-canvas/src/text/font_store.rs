use std::fmt;
use std::fs;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

/// Error returned by [`FontStore::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// One glyph placed by layout: top-left position plus its coverage bitmap,
/// ready for compositing.
pub(crate) struct PlacedGlyph {
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
    /// `width * height` coverage bytes, 0 = transparent, 255 = full.
    pub coverage: Vec<u8>,
}

/// Owns the font used to paint text tasks.
///
/// The font is immutable after loading. Layout runs per draw call on the
/// render thread; nothing here is shared across threads.
pub struct FontStore {
    font: fontdue::Font,
}

impl FontStore {
    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font })
    }

    /// Probes well-known system font paths and loads the first that parses.
    ///
    /// Returns `None` when no candidate exists; text tasks then degrade to
    /// logged no-ops.
    pub fn from_system_fonts() -> Option<Self> {
        let candidates = [
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
            "/usr/share/fonts/noto/NotoSans-Regular.ttf",
            "C:\\Windows\\Fonts\\segoeui.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];

        candidates.iter().find_map(|path| {
            let bytes = fs::read(path).ok()?;
            match Self::from_bytes(&bytes) {
                Ok(store) => {
                    log::debug!("loaded system font {path}");
                    Some(store)
                }
                Err(e) => {
                    log::warn!("skipping unparsable font {path}: {e}");
                    None
                }
            }
        })
    }

    /// Lays out `text` at `size` pixels with the block's top-left at
    /// `(x, y)` and rasterizes each visible glyph.
    ///
    /// Coordinates and size are in the caller's pixel space; pass physical
    /// pixels for crisp output under DPI scaling.
    pub(crate) fn rasterize(&self, text: &str, size: f32, x: f32, y: f32) -> Vec<PlacedGlyph> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { x, y, ..LayoutSettings::default() });
        layout.append(&[&self.font], &TextStyle::new(text, size, 0));

        layout
            .glyphs()
            .iter()
            .filter(|g| g.width > 0 && g.height > 0)
            .map(|g| {
                let (_metrics, coverage) = self.font.rasterize_config(g.key);
                PlacedGlyph {
                    x: g.x,
                    y: g.y,
                    width: g.width,
                    height: g.height,
                    coverage,
                }
            })
            .collect()
    }

}
