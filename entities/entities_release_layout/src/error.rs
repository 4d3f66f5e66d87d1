//! Layout Error Module
//!
//! Validation failures detected before the foreign runtime is entered.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::status::LaunchStatus;

/// Release layout validation error
#[derive(Debug, Error)]
pub enum LayoutError {
    /// `releases/start_erl.data` could not be opened or read
    #[error("could not locate {}: {source}", path.display())]
    DescriptorNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Descriptor contained no tokens
    #[error("no erts version token in start_erl.data")]
    MissingErtsVersion,
    /// Descriptor contained a single token
    #[error("no app version token in start_erl.data")]
    MissingAppVersion,
    /// `BINDIR` is not present in the launch environment
    #[error("BINDIR is not set")]
    BindirNotSet,
    #[error("sys.config not readable: {}", .0.display())]
    ConfigNotReadable(PathBuf),
    #[error("boot file not readable: {}", .0.display())]
    BootNotReadable(PathBuf),
    #[error("lib directory not readable: {}", .0.display())]
    LibNotReadable(PathBuf),
}

impl LayoutError {
    /// Status string reported to the host for this error
    pub fn status(&self) -> LaunchStatus {
        match self {
            LayoutError::DescriptorNotFound { .. } => LaunchStatus::DescriptorNotFound,
            LayoutError::MissingErtsVersion => LaunchStatus::MissingErtsVersion,
            LayoutError::MissingAppVersion => LaunchStatus::MissingAppVersion,
            LayoutError::BindirNotSet => LaunchStatus::BindirNotSet,
            LayoutError::ConfigNotReadable(_) => LaunchStatus::ConfigNotReadable,
            LayoutError::BootNotReadable(_) => LaunchStatus::BootNotReadable,
            LayoutError::LibNotReadable(_) => LaunchStatus::LibNotReadable,
        }
    }
}
