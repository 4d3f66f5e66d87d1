//! Log Context Module
//!
//! Location of the runtime log file, fixed by the first launch attempt of
//! the process. Nothing in the bootstrap writes to it; hosts read it back to
//! show or ship the runtime's log.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Record the log file location unless one is already set
///
/// Returns the location in effect, which is the first one ever recorded.
pub fn record_log_file(path: PathBuf) -> &'static Path {
    LOG_FILE.get_or_init(|| path)
}

/// Log file location, once a launch has been attempted
pub fn log_file() -> Option<&'static Path> {
    LOG_FILE.get().map(PathBuf::as_path)
}
