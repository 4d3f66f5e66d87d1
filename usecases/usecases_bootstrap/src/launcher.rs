//! Launcher Module
//!
//! Caller-side half of a launch: validates the release descriptor, then
//! moves the [`StartupSequence`] onto its own thread and returns.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use entities_release_layout::{LaunchRequest, LaunchStatus, LayoutError, ReleasePaths, ReleaseVersions};
use log::{error, info};

use crate::environment::{LaunchEnvironment, ProcessHost};
use crate::log_context::record_log_file;
use crate::runtime_entry::RuntimeEntry;
use crate::startup::StartupSequence;

/// Runtime thread settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Name given to the runtime thread
    pub thread_name: String,
    /// Stack size for the runtime thread; platform default when `None`
    pub stack_size: Option<usize>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            thread_name: "erlang".to_string(),
            stack_size: None,
        }
    }
}

/// Handle to a running launch
///
/// Dropping it detaches the runtime thread.
#[derive(Debug)]
pub struct LaunchHandle {
    thread: JoinHandle<LaunchStatus>,
}

impl LaunchHandle {
    /// Whether the runtime thread has finished
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Block until the runtime thread finishes
    ///
    /// A thread that died without producing a status reports
    /// [`LaunchStatus::Unknown`].
    pub fn wait(self) -> LaunchStatus {
        self.thread.join().unwrap_or(LaunchStatus::Unknown)
    }
}

/// Starts the embedded runtime on a background thread
#[derive(Clone)]
pub struct Launcher {
    entry: Arc<dyn RuntimeEntry>,
    host: Arc<dyn ProcessHost>,
    environment: Option<LaunchEnvironment>,
    config: LauncherConfig,
}

impl Launcher {
    pub fn new(entry: Arc<dyn RuntimeEntry>, host: Arc<dyn ProcessHost>) -> Self {
        Self {
            entry,
            host,
            environment: None,
            config: LauncherConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LauncherConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a fixed environment instead of reading the process environment
    /// when the runtime thread starts
    pub fn with_environment(mut self, environment: LaunchEnvironment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Fire-and-forget launch
    ///
    /// Returns [`LaunchStatus::Starting`] as soon as the runtime thread is
    /// spawned, or the validation error that prevented it. The eventual
    /// outcome of the runtime is only visible in the logs.
    pub fn start(&self, root: &str, home: &str) -> LaunchStatus {
        match self.start_with_handle(root, home) {
            Ok(_detached) => LaunchStatus::Starting,
            Err(status) => status,
        }
    }

    /// Launch and keep a handle to the runtime thread
    pub fn start_with_handle(&self, root: &str, home: &str) -> Result<LaunchHandle, LaunchStatus> {
        let request = LaunchRequest::new(root, home);
        record_log_file(request.log_file());

        let sequence = self.validate(request).map_err(|e| {
            let status = e.status();
            error!("{} ({})", status, e);
            status
        })?;

        self.spawn(sequence).map_err(|e| {
            error!("could not spawn runtime thread: {}", e);
            LaunchStatus::SpawnFailed
        })
    }

    fn validate(&self, request: LaunchRequest) -> Result<StartupSequence, LayoutError> {
        let descriptor = ReleasePaths::descriptor(request.root());
        info!("Start_erl.data file path: {}", descriptor.display());

        let versions = ReleaseVersions::read(&descriptor)?;
        Ok(StartupSequence::new(request, versions))
    }

    fn spawn(&self, sequence: StartupSequence) -> io::Result<LaunchHandle> {
        let entry = Arc::clone(&self.entry);
        let host = Arc::clone(&self.host);
        let fixed_environment = self.environment.clone();

        let mut builder = thread::Builder::new().name(self.config.thread_name.clone());
        if let Some(size) = self.config.stack_size {
            builder = builder.stack_size(size);
        }

        let thread = builder.spawn(move || {
            let environment = fixed_environment.unwrap_or_else(LaunchEnvironment::from_process);
            sequence.run(&environment, entry.as_ref(), host.as_ref())
        })?;

        Ok(LaunchHandle { thread })
    }
}
