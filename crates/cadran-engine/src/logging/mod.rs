//! Logging utilities.
//!
//! Centralizes logger initialization. The library itself only logs through
//! the `log` facade; binaries call [`init_logging`] once in `main`.

mod init;

pub use init::{LoggingConfig, init_logging};
