//! Use Cases Layer: Bootstrap
//!
//! Validates a release, builds the runtime's argument vector and starts the
//! runtime on a background thread.
//!
//! ## Launch Sequence
//!
//! 1. **Caller thread** ([`Launcher`](launcher/struct.Launcher.html)):
//!    - Normalize root and home directories
//!    - Record the log file location
//!    - Read `releases/start_erl.data`
//!    - Spawn the runtime thread and return `starting`
//!
//! 2. **Runtime thread** ([`StartupSequence`](startup/struct.StartupSequence.html)):
//!    - Extend `PATH` with `BINDIR` and enter the release root
//!    - Check `sys.config`, `start.boot` and `lib` (first failure wins)
//!    - Build the argument vector and hand it to the [`RuntimeEntry`]
//!
//! The foreign runtime and the process-wide side effects sit behind the
//! [`RuntimeEntry`] and [`ProcessHost`] traits; the adapters layer provides
//! the real implementations.

pub mod argv;
pub mod environment;
pub mod launcher;
pub mod log_context;
pub mod runtime_entry;
pub mod startup;

pub use argv::{RuntimeArgs, PROGRAM_NAME};
pub use environment::{LaunchEnvironment, ProcessHost};
pub use launcher::{LaunchHandle, Launcher, LauncherConfig};
pub use log_context::{log_file, record_log_file};
pub use runtime_entry::{invoke_entry, RuntimeEntry, RuntimeFailure};
pub use startup::StartupSequence;
