//! Logging setup shared by the IdeaBoard native entry points.
//!
//! The browser build reports through the console directly; this crate only
//! installs the `tracing` subscriber used by headless runs and tests.

mod init;

pub use init::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_ENV, LogFormat, LoggingConfig, build_sha, init_logging,
    log_format_from_env,
};
