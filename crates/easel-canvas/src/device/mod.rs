//! GPU presentation.
//!
//! Responsibilities:
//! - wgpu surface/device ownership and surface-error policy
//! - uploading the CPU-rasterized frame and blitting it to the window
//!
//! Everything here lives on the UI thread; caller threads never touch it.

mod blit;
mod gpu;

pub(crate) use blit::{BlitPipeline, PresentResult};
pub(crate) use gpu::Gpu;
