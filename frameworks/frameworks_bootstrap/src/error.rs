//! Host Setup Error Module

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while preparing the host for a launch
#[derive(Debug, Error)]
pub enum HostSetupError {
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid release archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl HostSetupError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| HostSetupError::Io {
            action,
            path,
            source,
        }
    }
}
