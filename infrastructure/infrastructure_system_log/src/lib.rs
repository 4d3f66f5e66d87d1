//! Infrastructure Layer: System Log
//!
//! A [`log`] backend for the bootstrap. Records go to the host's system log
//! (`syslog(3)` on Unix, which the Apple platforms route into the unified
//! log) and to standard error elsewhere.

pub mod system_logger;

pub use system_logger::{format_line, install, SystemLogger, LOG_TAG};
