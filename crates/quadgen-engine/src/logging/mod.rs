//! Logging setup.
//!
//! Everything logs through the `log` facade; `env_logger` is installed once here.

mod init;

pub use init::{init_logging, LoggingConfig};
