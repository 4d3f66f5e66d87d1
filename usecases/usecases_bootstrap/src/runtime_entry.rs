//! Runtime Entry Module
//!
//! The embedded runtime is reached through one opaque capability: run it with
//! an argument vector. Under normal operation the call never returns; when it
//! does, the runtime has shut down.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use entities_release_layout::LaunchStatus;
use thiserror::Error;

/// Failure reported by, or raised across, the runtime entry point
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeFailure {
    /// The runtime failed and a message is available
    #[error("runtime failed to start: {0}")]
    Failed(String),
    /// The runtime failed without a usable message
    #[error("runtime failed due to an unknown error")]
    Unknown,
}

impl RuntimeFailure {
    /// Convert a panic payload into a failure
    ///
    /// `&str` and `String` payloads carry a message; anything else is unknown.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<String>() {
            Ok(message) => RuntimeFailure::Failed(*message),
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => RuntimeFailure::Failed((*message).to_string()),
                Err(_) => RuntimeFailure::Unknown,
            },
        }
    }

    pub fn status(&self) -> LaunchStatus {
        match self {
            RuntimeFailure::Failed(_) => LaunchStatus::ErlStartFailed,
            RuntimeFailure::Unknown => LaunchStatus::Unknown,
        }
    }
}

/// Capability to start the embedded runtime
pub trait RuntimeEntry: Send + Sync {
    /// Start the runtime with `argv` (including `argv[0]`)
    ///
    /// Blocks for as long as the runtime is up.
    fn run(&self, argv: &[String]) -> Result<(), RuntimeFailure>;
}

/// Run `entry`, converting any panic that unwinds out of it into a failure
///
/// This is the single point where failures crossing the runtime boundary
/// are caught.
pub fn invoke_entry(entry: &dyn RuntimeEntry, argv: &[String]) -> Result<(), RuntimeFailure> {
    match panic::catch_unwind(AssertUnwindSafe(|| entry.run(argv))) {
        Ok(result) => result,
        Err(payload) => Err(RuntimeFailure::from_panic(payload)),
    }
}
