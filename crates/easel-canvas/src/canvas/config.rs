use std::fmt;
use std::time::Duration;

use crate::input::{ClickEvent, ClickHandler};

/// Parameters for [`Canvas::init`](crate::Canvas::init).
///
/// Width and height are the logical canvas size in pixels and stay fixed for
/// the window's lifetime.
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub on_click: Option<ClickHandler>,
    /// How long `init` waits for the window to come up.
    pub startup_timeout: Duration,
    /// How long a synchronous `render` waits for its frame.
    pub render_timeout: Duration,
}

impl CanvasConfig {
    pub const DEFAULT_STARTUP_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            title: "easel".to_string(),
            on_click: None,
            startup_timeout: Self::DEFAULT_STARTUP_TIMEOUT,
            render_timeout: Self::DEFAULT_RENDER_TIMEOUT,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Installs a click callback. It runs on the UI thread; a `Canvas` clone
    /// captured by the closure may draw and render from inside it.
    pub fn on_click(mut self, handler: impl Fn(ClickEvent) + Send + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn with_startup_timeout(mut self, timeout: Duration) -> Self {
        self.startup_timeout = timeout;
        self
    }

    pub fn with_render_timeout(mut self, timeout: Duration) -> Self {
        self.render_timeout = timeout;
        self
    }
}

impl fmt::Debug for CanvasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasConfig")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("title", &self.title)
            .field("on_click", &self.on_click.as_ref().map(|_| "<handler>"))
            .field("startup_timeout", &self.startup_timeout)
            .field("render_timeout", &self.render_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain_overrides_defaults() {
        let config = CanvasConfig::new(640, 480)
            .with_title("sketch")
            .with_startup_timeout(Duration::from_secs(1))
            .with_render_timeout(Duration::from_millis(250))
            .on_click(|_| {});

        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.title, "sketch");
        assert!(config.on_click.is_some());
        assert_eq!(config.startup_timeout, Duration::from_secs(1));
        assert_eq!(config.render_timeout, Duration::from_millis(250));
    }

    #[test]
    fn defaults_are_sensible() {
        let config = CanvasConfig::new(400, 400);
        assert_eq!(config.title, "easel");
        assert!(config.on_click.is_none());
        assert_eq!(config.startup_timeout, CanvasConfig::DEFAULT_STARTUP_TIMEOUT);
        assert_eq!(config.render_timeout, CanvasConfig::DEFAULT_RENDER_TIMEOUT);
    }
}
