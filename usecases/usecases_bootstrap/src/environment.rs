//! Launch Environment Module
//!
//! Snapshot of the environment variables the startup sequence consumes, and
//! the seam through which it touches process-wide state.

use std::env;
use std::io;
use std::path::Path;

use entities_release_layout::LaunchRequest;

const PATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// Environment variables read at launch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchEnvironment {
    /// `BINDIR`: the runtime's binary directory
    pub bindir: Option<String>,
    /// `PATH` before the launch extends it
    pub path: Option<String>,
    /// `HOME`, if the host set one
    pub home: Option<String>,
}

impl LaunchEnvironment {
    /// Capture `BINDIR`, `PATH` and `HOME` from the current process
    pub fn from_process() -> Self {
        Self {
            bindir: env::var("BINDIR").ok(),
            path: env::var("PATH").ok(),
            home: env::var("HOME").ok(),
        }
    }

    /// `PATH` with `bindir` appended
    pub fn extended_path(&self, bindir: &str) -> String {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}{}", path, PATH_SEPARATOR, bindir),
            _ => bindir.to_string(),
        }
    }

    /// `HOME`, falling back to `<root>home`
    pub fn home_dir(&self, request: &LaunchRequest) -> String {
        self.home
            .clone()
            .unwrap_or_else(|| request.fallback_home())
    }
}

/// Process-wide facilities used by the startup sequence
///
/// The real implementation mutates the whole process: the `PATH` it installs
/// and the directory it enters stay in effect for the process lifetime,
/// because the embedded runtime reads both internally.
pub trait ProcessHost: Send + Sync {
    /// Replace the process `PATH`
    fn install_path(&self, path: &str);

    /// Change the process working directory
    fn enter_directory(&self, dir: &Path) -> io::Result<()>;

    /// Whether `path` exists and is readable by this process
    fn is_readable(&self, path: &Path) -> bool;
}
