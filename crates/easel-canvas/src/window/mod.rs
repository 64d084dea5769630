//! Window bring-up and the UI-thread runtime.
//!
//! Responsibilities:
//! - the readiness handshake between `init` and the UI thread (condvar gate)
//! - the repaint completion signal the synchronous render mode waits on
//! - the winit event loop running on a dedicated background thread

pub(crate) mod lifecycle;
pub(crate) mod runtime;
