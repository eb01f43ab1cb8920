//! Logging setup.
//!
//! The engine logs through the `log` facade; `init_logging` installs an
//! `env_logger` backend once per process.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
