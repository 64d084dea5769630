pub(crate) mod ellipse;
pub(crate) mod image;
pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rect;
pub(crate) mod text;

pub use ellipse::EllipseTask;
pub use image::ImageTask;
pub use line::LineTask;
pub use polygon::PolygonTask;
pub use rect::RectTask;
pub use text::TextTask;
