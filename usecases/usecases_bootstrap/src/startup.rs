//! Startup Sequence Module
//!
//! Everything that happens on the runtime thread: environment setup, release
//! file checks, argument assembly and the call into the runtime.

use entities_release_layout::{LaunchRequest, LaunchStatus, LayoutError, ReleasePaths, ReleaseVersions};
use log::{error, info, warn};

use crate::argv::RuntimeArgs;
use crate::environment::{LaunchEnvironment, ProcessHost};
use crate::runtime_entry::{invoke_entry, RuntimeEntry};

/// A validated launch, ready to run on the runtime thread
#[derive(Debug, Clone)]
pub struct StartupSequence {
    request: LaunchRequest,
    versions: ReleaseVersions,
}

impl StartupSequence {
    pub fn new(request: LaunchRequest, versions: ReleaseVersions) -> Self {
        Self { request, versions }
    }

    pub fn request(&self) -> &LaunchRequest {
        &self.request
    }

    pub fn versions(&self) -> &ReleaseVersions {
        &self.versions
    }

    /// Set up the process and check the release
    ///
    /// Installs the extended `PATH` and enters the release root, then checks
    /// `sys.config`, `start.boot` and `lib` in that order, stopping at the
    /// first one that is not readable.
    ///
    /// # Returns
    /// * `Ok(RuntimeArgs)` - Values for the runtime's argument vector
    /// * `Err(LayoutError)` - `BINDIR` missing or a release file not readable
    pub fn prepare(
        &self,
        environment: &LaunchEnvironment,
        host: &dyn ProcessHost,
    ) -> Result<RuntimeArgs, LayoutError> {
        let bindir = environment
            .bindir
            .clone()
            .ok_or(LayoutError::BindirNotSet)?;

        // Irreversible for the process: the runtime reads PATH and cwd itself.
        host.install_path(&environment.extended_path(&bindir));
        if let Err(e) = host.enter_directory(self.request.root_path()) {
            warn!("could not enter release root {}: {}", self.request.root(), e);
        }

        let paths = ReleasePaths::new(self.request.root(), &self.versions.app_version);

        let config_file = paths.config_file();
        if !host.is_readable(&config_file) {
            return Err(LayoutError::ConfigNotReadable(config_file));
        }
        info!("sys.config file EXISTS: {}", config_file.display());

        let boot_file = paths.boot_file();
        if !host.is_readable(&boot_file) {
            return Err(LayoutError::BootNotReadable(boot_file));
        }

        let lib = paths.lib_dir();
        if !host.is_readable(lib.as_ref()) {
            return Err(LayoutError::LibNotReadable(lib.into()));
        }

        Ok(RuntimeArgs {
            root: self.request.root().to_string(),
            home: environment.home_dir(&self.request),
            config: paths.config_base(),
            boot: paths.boot_base(),
            bindir,
            lib,
        })
    }

    /// Run the whole sequence and hand control to the runtime
    ///
    /// Returns only when the runtime does, or when a check fails first.
    pub fn run(
        &self,
        environment: &LaunchEnvironment,
        entry: &dyn RuntimeEntry,
        host: &dyn ProcessHost,
    ) -> LaunchStatus {
        let args = match self.prepare(environment, host) {
            Ok(args) => args,
            Err(e) => {
                let status = e.status();
                error!("{} ({})", status, e);
                return status;
            }
        };

        info!(
            "Starting Erlang (erts {}, release {})...",
            self.versions.erts_version, self.versions.app_version
        );
        match invoke_entry(entry, &args.to_argv()) {
            Ok(()) => {
                info!("Erlang exited normally");
                LaunchStatus::Ok
            }
            Err(failure) => {
                error!("{}", failure);
                failure.status()
            }
        }
    }
}
