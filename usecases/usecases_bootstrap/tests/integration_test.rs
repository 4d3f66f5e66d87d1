//! Integration tests for usecases_bootstrap
//!
//! Drives the launcher and startup sequence against on-disk release layouts,
//! with a recording process host and scripted runtime entries.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use entities_release_layout::{LaunchRequest, LaunchStatus, ReleaseVersions};
use tempfile::TempDir;
use usecases_bootstrap::{
    LaunchEnvironment, Launcher, LauncherConfig, ProcessHost, RuntimeEntry, RuntimeFailure,
    StartupSequence,
};

#[derive(Default)]
struct RecordingHost {
    checked: Mutex<Vec<PathBuf>>,
    path: Mutex<Option<String>>,
    entered: Mutex<Option<PathBuf>>,
}

impl ProcessHost for RecordingHost {
    fn install_path(&self, path: &str) {
        *self.path.lock().unwrap() = Some(path.to_string());
    }

    fn enter_directory(&self, dir: &Path) -> io::Result<()> {
        *self.entered.lock().unwrap() = Some(dir.to_path_buf());
        Ok(())
    }

    fn is_readable(&self, path: &Path) -> bool {
        self.checked.lock().unwrap().push(path.to_path_buf());
        path.exists()
    }
}

struct ScriptedEntry {
    result: Result<(), RuntimeFailure>,
    argv: Mutex<Option<Vec<String>>>,
}

impl ScriptedEntry {
    fn new(result: Result<(), RuntimeFailure>) -> Self {
        Self {
            result,
            argv: Mutex::new(None),
        }
    }
}

impl RuntimeEntry for ScriptedEntry {
    fn run(&self, argv: &[String]) -> Result<(), RuntimeFailure> {
        *self.argv.lock().unwrap() = Some(argv.to_vec());
        self.result.clone()
    }
}

/// Blocks until released, like a runtime that takes over the thread
struct BlockingEntry {
    entered: Mutex<Sender<()>>,
    release: Mutex<Receiver<()>>,
}

impl RuntimeEntry for BlockingEntry {
    fn run(&self, _argv: &[String]) -> Result<(), RuntimeFailure> {
        let _ = self.entered.lock().unwrap().send(());
        let _ = self.release.lock().unwrap().recv();
        Ok(())
    }
}

struct Release {
    dir: TempDir,
}

impl Release {
    fn new(descriptor: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("releases/1.2.3")).unwrap();
        if let Some(contents) = descriptor {
            fs::write(dir.path().join("releases/start_erl.data"), contents).unwrap();
        }
        Self { dir }
    }

    fn complete() -> Self {
        let release = Self::new(Some("13.0 1.2.3\n"));
        release.write("releases/1.2.3/sys.config");
        release.write("releases/1.2.3/start.boot");
        fs::create_dir_all(release.dir.path().join("lib")).unwrap();
        release
    }

    fn write(&self, relative: &str) {
        fs::write(self.dir.path().join(relative), "").unwrap();
    }

    fn root(&self) -> String {
        self.dir.path().to_str().unwrap().to_string()
    }

    fn sequence(&self) -> StartupSequence {
        let request = LaunchRequest::new(&self.root(), "/tmp/docs");
        let versions = ReleaseVersions {
            erts_version: "13.0".to_string(),
            app_version: "1.2.3".to_string(),
        };
        StartupSequence::new(request, versions)
    }
}

fn environment() -> LaunchEnvironment {
    LaunchEnvironment {
        bindir: Some("/rt/bin".to_string()),
        path: Some("/usr/bin".to_string()),
        home: None,
    }
}

#[test]
fn test_sequence_runs_entry_with_golden_argv() {
    let release = Release::complete();
    let host = RecordingHost::default();
    let entry = ScriptedEntry::new(Ok(()));

    let status = release.sequence().run(&environment(), &entry, &host);
    assert_eq!(status, LaunchStatus::Ok);

    let root = format!("{}/", release.root());
    let home = format!("{}home", root);
    let config = format!("{}releases/1.2.3/sys", root);
    let boot = format!("{}releases/1.2.3/start", root);
    let lib = format!("{}lib", root);
    let expected: Vec<&str> = vec![
        "test_main", "-sbwt", "none", "-MIscs", "10",
        "--", "-root", root.as_str(), "-progname", "erl",
        "--", "-home", home.as_str(), "--",
        "-kernel", "shell_history", "enabled",
        "--", "-elixir", "ansi_enabled", "true",
        "-noshell", "-s", "elixir", "start_cli",
        "-mode", "interactive", "-config", config.as_str(),
        "-boot", boot.as_str(), "-bindir", "/rt/bin",
        "-boot_var", "RELEASE_LIB", lib.as_str(),
        "--", "--", "-extra", "--no-halt",
    ];
    assert_eq!(entry.argv.lock().unwrap().clone().unwrap(), expected);
}

#[test]
fn test_sequence_mutates_process_state() {
    let release = Release::complete();
    let host = RecordingHost::default();

    release
        .sequence()
        .run(&environment(), &ScriptedEntry::new(Ok(())), &host);

    let sep = if cfg!(windows) { ";" } else { ":" };
    assert_eq!(
        host.path.lock().unwrap().clone(),
        Some(format!("/usr/bin{}/rt/bin", sep))
    );
    assert_eq!(
        host.entered.lock().unwrap().clone(),
        Some(PathBuf::from(format!("{}/", release.root())))
    );
}

#[test]
fn test_sequence_uses_home_from_environment() {
    let release = Release::complete();
    let host = RecordingHost::default();
    let mut env = environment();
    env.home = Some("/home/user".to_string());

    let args = release.sequence().prepare(&env, &host).unwrap();
    assert_eq!(args.home, "/home/user");
}

#[test]
fn test_missing_config_stops_checks() {
    let release = Release::new(Some("13.0 1.2.3"));
    release.write("releases/1.2.3/start.boot");
    let host = RecordingHost::default();
    let entry = ScriptedEntry::new(Ok(()));

    let status = release.sequence().run(&environment(), &entry, &host);

    assert_eq!(status, LaunchStatus::ConfigNotReadable);
    assert_eq!(status.as_str(), "sys.config file NOT FOUND or NOT READABLE");
    let checked = host.checked.lock().unwrap();
    assert_eq!(checked.len(), 1);
    assert!(checked[0].ends_with("releases/1.2.3/sys.config"));
    assert!(entry.argv.lock().unwrap().is_none());
}

#[test]
fn test_missing_boot_and_lib() {
    let release = Release::new(Some("13.0 1.2.3"));
    release.write("releases/1.2.3/sys.config");
    let host = RecordingHost::default();

    let status = release
        .sequence()
        .run(&environment(), &ScriptedEntry::new(Ok(())), &host);
    assert_eq!(status, LaunchStatus::BootNotReadable);
    assert_eq!(host.checked.lock().unwrap().len(), 2);

    release.write("releases/1.2.3/start.boot");
    let status = release
        .sequence()
        .run(&environment(), &ScriptedEntry::new(Ok(())), &RecordingHost::default());
    assert_eq!(status, LaunchStatus::LibNotReadable);
}

#[test]
fn test_missing_bindir() {
    let release = Release::complete();
    let host = RecordingHost::default();
    let env = LaunchEnvironment::default();

    let status = release
        .sequence()
        .run(&env, &ScriptedEntry::new(Ok(())), &host);
    assert_eq!(status, LaunchStatus::BindirNotSet);
    assert!(host.path.lock().unwrap().is_none());
}

#[test]
fn test_runtime_failures_map_to_generic_statuses() {
    let release = Release::complete();

    let failed = ScriptedEntry::new(Err(RuntimeFailure::Failed("boom".to_string())));
    let status = release
        .sequence()
        .run(&environment(), &failed, &RecordingHost::default());
    assert_eq!(status.as_str(), "error_erl_start_failed");

    let unknown = ScriptedEntry::new(Err(RuntimeFailure::Unknown));
    let status = release
        .sequence()
        .run(&environment(), &unknown, &RecordingHost::default());
    assert_eq!(status.as_str(), "error_unknown");
}

#[test]
fn test_start_returns_starting_while_runtime_blocks() {
    let release = Release::complete();
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let entry = Arc::new(BlockingEntry {
        entered: Mutex::new(entered_tx),
        release: Mutex::new(release_rx),
    });
    let launcher = Launcher::new(entry, Arc::new(RecordingHost::default()))
        .with_environment(environment());

    let handle = launcher
        .start_with_handle(&release.root(), "/tmp/docs")
        .unwrap();

    entered_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(!handle.is_finished());

    release_tx.send(()).unwrap();
    assert_eq!(handle.wait(), LaunchStatus::Ok);
}

#[test]
fn test_start_is_fire_and_forget() {
    let release = Release::complete();
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let entry = Arc::new(BlockingEntry {
        entered: Mutex::new(entered_tx),
        release: Mutex::new(release_rx),
    });
    let launcher = Launcher::new(entry, Arc::new(RecordingHost::default()))
        .with_environment(environment())
        .with_config(LauncherConfig {
            thread_name: "erlang-test".to_string(),
            stack_size: Some(4 * 1024 * 1024),
        });

    let status = launcher.start(&release.root(), "/tmp/docs");
    assert_eq!(status.as_str(), "starting");

    entered_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    release_tx.send(()).unwrap();
}

#[test]
fn test_start_missing_descriptor() {
    let release = Release::new(None);
    let entry = Arc::new(ScriptedEntry::new(Ok(())));
    let launcher = Launcher::new(entry.clone(), Arc::new(RecordingHost::default()))
        .with_environment(environment());

    let status = launcher.start(&release.root(), "/tmp/docs");
    assert_eq!(status.as_str(), "Could not locate start_erl.data");
    assert!(entry.argv.lock().unwrap().is_none());
}

#[test]
fn test_start_malformed_descriptor() {
    let host = Arc::new(RecordingHost::default());
    let entry = Arc::new(ScriptedEntry::new(Ok(())));
    let launcher = Launcher::new(entry, host.clone()).with_environment(environment());

    let single = Release::new(Some("13.0\n"));
    assert_eq!(
        launcher.start(&single.root(), "/tmp/docs"),
        LaunchStatus::MissingAppVersion
    );

    let empty = Release::new(Some(""));
    assert_eq!(
        launcher.start(&empty.root(), "/tmp/docs"),
        LaunchStatus::MissingErtsVersion
    );

    assert!(host.checked.lock().unwrap().is_empty());
}

#[test]
fn test_start_records_log_file() {
    let release = Release::new(None);
    let launcher = Launcher::new(
        Arc::new(ScriptedEntry::new(Ok(()))),
        Arc::new(RecordingHost::default()),
    );

    launcher.start(&release.root(), "/tmp/docs");
    let log_file = usecases_bootstrap::log_file().unwrap();
    assert!(log_file.ends_with("elixir.log"));
}
