//! System Logger Module

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Prefix of every emitted line
pub const LOG_TAG: &str = "bootstrap";

static LOGGER: SystemLogger = SystemLogger;

/// [`Log`] implementation writing to the system log
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLogger;

/// Install the system logger as the global logger
///
/// Hosts that already installed their own logger keep it; only the maximum
/// level is raised to `level` in that case. Returns whether this call
/// installed the system logger.
pub fn install(level: LevelFilter) -> bool {
    let installed = log::set_logger(&LOGGER).is_ok();
    if installed || log::max_level() < level {
        log::set_max_level(level);
    }
    installed
}

/// Render a record as `[bootstrap][LEVEL] message`
pub fn format_line(level: Level, message: &str) -> String {
    format!("[{}][{}] {}", LOG_TAG, level, message)
}

impl Log for SystemLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(unix)]
fn write_line(level: Level, line: &str) {
    use std::ffi::CString;

    let priority = match level {
        Level::Error => libc::LOG_ERR,
        Level::Warn => libc::LOG_WARNING,
        Level::Info => libc::LOG_NOTICE,
        Level::Debug | Level::Trace => libc::LOG_DEBUG,
    };
    // Interior NULs would truncate the line; replace them instead.
    let Ok(message) = CString::new(line.replace('\0', "\\0")) else {
        return;
    };
    // SAFETY: both pointers are valid NUL-terminated strings and the format
    // consumes exactly one string argument.
    unsafe {
        libc::syslog(
            priority | libc::LOG_USER,
            c"%s".as_ptr(),
            message.as_ptr(),
        );
    }
}

#[cfg(not(unix))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Error, "lib_path NOT FOUND or NOT READABLE"),
            "[bootstrap][ERROR] lib_path NOT FOUND or NOT READABLE"
        );
        assert_eq!(format_line(Level::Info, "Starting Erlang..."), "[bootstrap][INFO] Starting Erlang...");
    }

    #[test]
    fn test_enabled_follows_max_level() {
        install(LevelFilter::Info);
        let logger = SystemLogger;
        let info = Metadata::builder().level(Level::Info).build();
        let trace = Metadata::builder().level(Level::Trace).build();
        assert!(logger.enabled(&info));
        assert_eq!(logger.enabled(&trace), log::max_level() >= Level::Trace);
    }
}
