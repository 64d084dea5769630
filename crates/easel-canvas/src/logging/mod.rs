//! Logger bootstrap.
//!
//! Centralizes `env_logger` initialization so demo binaries and tests agree
//! on one setup. Only the `log` facade is used elsewhere in the crate.

mod init;

pub use init::{LoggingConfig, init_logging};
