//! Logging utilities.
//!
//! Logger initialization for binaries built on the engine. Library code only
//! uses the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
