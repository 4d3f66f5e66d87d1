//! Launch Status Module
//!
//! The fixed set of strings a launch attempt reports to its host. The strings
//! are part of the C boundary: hosts compare them literally, so they must not
//! change.

use std::ffi::CStr;
use std::fmt;

/// Outcome of a launch attempt, as reported across the host boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchStatus {
    /// Validation passed and the background thread was spawned
    Starting,
    /// The runtime returned normally (shutdown)
    Ok,
    DescriptorNotFound,
    MissingErtsVersion,
    MissingAppVersion,
    BindirNotSet,
    ConfigNotReadable,
    BootNotReadable,
    LibNotReadable,
    /// Null or non-UTF-8 arguments at the C boundary
    InvalidArguments,
    /// The background thread could not be created
    SpawnFailed,
    /// The runtime failed with a message
    ErlStartFailed,
    /// The runtime failed without a usable message
    Unknown,
}

impl LaunchStatus {
    /// Every status, in declaration order
    pub const ALL: [LaunchStatus; 13] = [
        LaunchStatus::Starting,
        LaunchStatus::Ok,
        LaunchStatus::DescriptorNotFound,
        LaunchStatus::MissingErtsVersion,
        LaunchStatus::MissingAppVersion,
        LaunchStatus::BindirNotSet,
        LaunchStatus::ConfigNotReadable,
        LaunchStatus::BootNotReadable,
        LaunchStatus::LibNotReadable,
        LaunchStatus::InvalidArguments,
        LaunchStatus::SpawnFailed,
        LaunchStatus::ErlStartFailed,
        LaunchStatus::Unknown,
    ];

    /// NUL-terminated status string with static lifetime
    pub fn as_c_str(self) -> &'static CStr {
        match self {
            LaunchStatus::Starting => c"starting",
            LaunchStatus::Ok => c"ok",
            LaunchStatus::DescriptorNotFound => c"Could not locate start_erl.data",
            LaunchStatus::MissingErtsVersion => c"Could not identify erts version in start_erl.data",
            LaunchStatus::MissingAppVersion => c"Could not identify app version in start_erl.data",
            LaunchStatus::BindirNotSet => c"BINDIR NOT SET",
            LaunchStatus::ConfigNotReadable => c"sys.config file NOT FOUND or NOT READABLE",
            LaunchStatus::BootNotReadable => c"boot_path NOT FOUND or NOT READABLE",
            LaunchStatus::LibNotReadable => c"lib_path NOT FOUND or NOT READABLE",
            LaunchStatus::InvalidArguments => c"error_invalid_arguments",
            LaunchStatus::SpawnFailed => c"error_spawn_failed",
            LaunchStatus::ErlStartFailed => c"error_erl_start_failed",
            LaunchStatus::Unknown => c"error_unknown",
        }
    }

    /// Status string without the terminator
    pub fn as_str(self) -> &'static str {
        // All literals above are ASCII.
        self.as_c_str().to_str().unwrap_or("error_unknown")
    }

    /// `true` for everything except [`Starting`](Self::Starting) and [`Ok`](Self::Ok)
    pub fn is_error(self) -> bool {
        !matches!(self, LaunchStatus::Starting | LaunchStatus::Ok)
    }

    /// Classify a status string received from the C boundary
    ///
    /// Also accepts the short tags older hosts match on. Anything
    /// unrecognized is treated as [`Starting`](Self::Starting): the host only
    /// needs to know the runtime thread may be coming up.
    pub fn from_status_str(status: &str) -> Self {
        match status {
            "error_sys_config_missing" => return LaunchStatus::ConfigNotReadable,
            "error_boot_missing" => return LaunchStatus::BootNotReadable,
            "error_lib_missing" => return LaunchStatus::LibNotReadable,
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == status)
            .unwrap_or(LaunchStatus::Starting)
    }
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
