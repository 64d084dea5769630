/// Straight-alpha sRGB color, 8 bits per channel.
///
/// Colors cross the caller/render thread boundary inside draw tasks, so the
/// type stays plain data. Premultiplication (needed by the rasterizer's pixel
/// buffers) happens at the render boundary, never here.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
    pub const GRAY: Color = Color::from_rgb8(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::from_rgb8(211, 211, 211);
    pub const DARK_GRAY: Color = Color::from_rgb8(64, 64, 64);
    pub const RED: Color = Color::from_rgb8(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb8(0, 128, 0);
    pub const LIME: Color = Color::from_rgb8(0, 255, 0);
    pub const BLUE: Color = Color::from_rgb8(0, 0, 255);
    pub const YELLOW: Color = Color::from_rgb8(255, 255, 0);
    pub const CYAN: Color = Color::from_rgb8(0, 255, 255);
    pub const MAGENTA: Color = Color::from_rgb8(255, 0, 255);
    pub const ORANGE: Color = Color::from_rgb8(255, 165, 0);

    /// Opaque color from RGB bytes.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}
