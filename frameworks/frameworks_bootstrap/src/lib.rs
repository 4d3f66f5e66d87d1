//! Frameworks Layer: Bootstrap
//!
//! Host-side setup around a launch, and the `erl_launcher` binary that
//! drives it on desktop systems.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: Command-line arguments of `erl_launcher`
//! - **[`host_env`](host_env/index.html)**: Environment variables and `inetrc`
//!   the runtime expects from its host
//! - **[`release_archive`](release_archive/index.html)**: Installing a bundled
//!   release archive into the app directory
//! - **[`error`](error/index.html)**: Host setup errors
//!
//! ## Host Sequence
//!
//! 1. Install the release archive if it changed
//! 2. Write `inetrc` and export `HOME`, `BINDIR`, `ERL_INETRC`, ...
//! 3. Launch through [`usecases_bootstrap::Launcher`]

pub mod args;
pub mod error;
pub mod host_env;
pub mod release_archive;

pub use args::BootstrapArgs;
pub use error::HostSetupError;
pub use host_env::{write_inetrc, HostEnvironment, INETRC_CONTENTS};
pub use release_archive::{install_release, ArchiveInstall, STAMP_FILE};
