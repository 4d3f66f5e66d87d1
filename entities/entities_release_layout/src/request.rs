//! Launch Request Module
//!
//! Holds the two directories a host hands to the launcher and normalizes
//! them so later path derivation is plain string concatenation.

use std::path::{Path, PathBuf};

/// File name of the runtime log inside the home directory
pub const LOG_FILE_NAME: &str = "elixir.log";

const SEPARATOR: char = '/';

/// Append a trailing `/` to `dir` unless it already ends with one.
///
/// Empty strings are left empty so that an empty root never turns into `/`.
pub fn ensure_trailing_separator(dir: &mut String) {
    if !dir.is_empty() && !dir.ends_with(SEPARATOR) {
        dir.push(SEPARATOR);
    }
}

/// Owned variant of [`ensure_trailing_separator`]
pub fn normalize_dir(dir: &str) -> String {
    let mut normalized = dir.to_string();
    ensure_trailing_separator(&mut normalized);
    normalized
}

/// A request to launch the release rooted at `root`
///
/// Both directories are stored with exactly one trailing separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    root: String,
    home: String,
}

impl LaunchRequest {
    /// Create a request, normalizing both directories
    ///
    /// # Arguments
    /// * `root` - Release root (contains `releases/` and `lib/`)
    /// * `home` - Home/log directory chosen by the host
    pub fn new(root: &str, home: &str) -> Self {
        Self {
            root: normalize_dir(root),
            home: normalize_dir(home),
        }
    }

    /// Normalized release root, ending in `/`
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Normalized home directory, ending in `/`
    pub fn home(&self) -> &str {
        &self.home
    }

    /// Release root as a filesystem path
    pub fn root_path(&self) -> &Path {
        Path::new(&self.root)
    }

    /// Location the runtime log would be written to
    pub fn log_file(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.home, LOG_FILE_NAME))
    }

    /// Fallback home used when the environment provides no `HOME`
    pub fn fallback_home(&self) -> String {
        format!("{}home", self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_trailing_separator_appends() {
        let mut dir = String::from("/data/app");
        ensure_trailing_separator(&mut dir);
        assert_eq!(dir, "/data/app/");
    }

    #[test]
    fn test_ensure_trailing_separator_idempotent() {
        let mut dir = String::from("/data/app/");
        ensure_trailing_separator(&mut dir);
        ensure_trailing_separator(&mut dir);
        assert_eq!(dir, "/data/app/");
    }

    #[test]
    fn test_ensure_trailing_separator_empty() {
        let mut dir = String::new();
        ensure_trailing_separator(&mut dir);
        assert!(dir.is_empty());
    }

    #[test]
    fn test_launch_request_paths() {
        let request = LaunchRequest::new("/app", "/docs/");
        assert_eq!(request.root(), "/app/");
        assert_eq!(request.home(), "/docs/");
        assert_eq!(request.log_file(), PathBuf::from("/docs/elixir.log"));
        assert_eq!(request.fallback_home(), "/app/home");
    }
}
