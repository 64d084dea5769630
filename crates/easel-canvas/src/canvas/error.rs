use std::error::Error;
use std::fmt;

/// Why `Canvas::init` failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// A canvas window is already live in this process.
    AlreadyInitialized,
    /// The UI thread reported a bring-up error.
    Bootstrap(String),
    /// The window did not become ready within the startup budget.
    StartupTimeout,
    /// The platform cannot run the window loop on a worker thread.
    UnsupportedPlatform,
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => {
                write!(f, "a canvas is already initialized in this process")
            }
            Self::Bootstrap(reason) => write!(f, "window bring-up failed: {reason}"),
            Self::StartupTimeout => write!(f, "window did not become ready in time"),
            Self::UnsupportedPlatform => {
                write!(f, "this platform does not support a background window loop")
            }
        }
    }
}

impl Error for CanvasError {}
