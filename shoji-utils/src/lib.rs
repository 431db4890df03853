//! shoji-utils: Shared infrastructure for the shoji tiling daemon
//!
//! Provides the unified error type, logging setup, and XDG path helpers
//! used by the daemon and the client.

pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Result, ShojiError};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogOutput};
pub use paths::{config_dir, config_file, log_dir, runtime_dir, socket_path};
