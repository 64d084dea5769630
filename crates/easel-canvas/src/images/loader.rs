use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Failure kind from [`load_image`].
///
/// Distinguished (instead of one boolean) because callers routinely branch on
/// "missing file" vs "bad file".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoadError {
    /// The file does not exist or the path cannot be opened as a file.
    NotFound,
    /// The file exists but is not a decodable image.
    UnsupportedFormat,
    /// Any other I/O or decoder failure.
    Unknown(String),
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::NotFound => write!(f, "image file not found"),
            ImageLoadError::UnsupportedFormat => write!(f, "image file format not supported"),
            ImageLoadError::Unknown(msg) => write!(f, "image load failed: {msg}"),
        }
    }
}

impl std::error::Error for ImageLoadError {}

/// Decoded image ready for compositing.
///
/// Pixels are premultiplied RGBA8 rows (`width * height * 4` bytes), the
/// layout the rasterizer composites directly. The buffer is shared, so
/// cloning a handle (and cloning draw tasks that carry one) is cheap.
///
/// Equality is handle identity: two separate loads of the same file compare
/// unequal.
#[derive(Debug, Clone)]
pub struct CanvasImage {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl PartialEq for CanvasImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl CanvasImage {
    /// Builds an image from straight-alpha RGBA8 pixels.
    ///
    /// Returns `None` when `data` is not exactly `width * height * 4` bytes
    /// or either dimension is zero.
    pub fn from_rgba8(width: u32, height: u32, mut data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?.checked_mul(4)?;
        if width == 0 || height == 0 || data.len() != expected {
            return None;
        }
        premultiply_in_place(&mut data);
        Some(Self { width, height, pixels: data.into() })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 pixel rows.
    #[inline]
    pub(crate) fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Loads and decodes an image file into a [`CanvasImage`].
///
/// The format is sniffed from the file contents, not the extension. Supported
/// formats follow the enabled decoder set (png, jpeg, bmp, gif, ico, tiff,
/// webp).
pub fn load_image(path: impl AsRef<Path>) -> Result<CanvasImage, ImageLoadError> {
    let path = path.as_ref();

    let reader = image::ImageReader::open(path)
        .map_err(open_error_kind)?
        .with_guessed_format()
        .map_err(open_error_kind)?;

    let decoded = reader.decode().map_err(decode_error_kind)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    premultiply_in_place(&mut data);

    log::debug!("loaded image {path:?} ({width}x{height})");
    Ok(CanvasImage { width, height, pixels: data.into() })
}

fn open_error_kind(e: io::Error) -> ImageLoadError {
    match e.kind() {
        io::ErrorKind::NotFound => ImageLoadError::NotFound,
        _ => ImageLoadError::Unknown(e.to_string()),
    }
}

fn decode_error_kind(e: image::ImageError) -> ImageLoadError {
    match e {
        image::ImageError::Unsupported(_) | image::ImageError::Decoding(_) => {
            ImageLoadError::UnsupportedFormat
        }
        image::ImageError::IoError(io_err) => open_error_kind(io_err),
        other => ImageLoadError::Unknown(other.to_string()),
    }
}

fn premultiply_in_place(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
