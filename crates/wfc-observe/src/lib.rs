//! Logging setup shared by the workflow-configuration service binaries.

mod config;
mod error;
mod format;
mod init;
mod level;
mod timer;
mod timezone;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use init::init_logger;
pub use level::LoggerLevel;
pub use timezone::{LoggerTimeZone, init_local_offset};
