//! Embedded Runtime Launcher Entry Point
//!
//! Desktop counterpart of a mobile host application: installs the bundled
//! release, prepares the environment, then launches the runtime through
//! `erl_start()` on a background thread and waits for it.

use std::process;
use std::sync::Arc;

use adapters_erl_start::{DynamicErlStart, SystemProcess};
use clap::Parser;
use entities_release_layout::LaunchStatus;
use frameworks_bootstrap::{install_release, write_inetrc, BootstrapArgs, HostEnvironment, HostSetupError};
use log::info;
use usecases_bootstrap::{Launcher, LauncherConfig, RuntimeEntry};

fn runtime_entry(args: &BootstrapArgs) -> Arc<dyn RuntimeEntry> {
    if let Some(library) = &args.runtime_library {
        return Arc::new(DynamicErlStart::from_library(library));
    }
    #[cfg(feature = "linked-erts")]
    {
        Arc::new(adapters_erl_start::LinkedErlStart)
    }
    #[cfg(not(feature = "linked-erts"))]
    {
        Arc::new(DynamicErlStart::from_process())
    }
}

fn prepare_host(args: &BootstrapArgs) -> Result<(), HostSetupError> {
    let root = args.root_dir();

    if let Some(archive) = &args.archive {
        let outcome = install_release(archive, &root)?;
        info!("release archive {}: {:?}", archive.display(), outcome);
    }

    let mut host = HostEnvironment::new(&args.home);
    if let Some(bindir) = &args.bindir {
        host.bindir = bindir.clone();
    }
    if let Some(os_name) = &args.os_name {
        host.os_name = os_name.clone();
    }
    host.bridge_port = args.bridge_port;
    host.inetrc = Some(write_inetrc(&root)?);
    host.apply();

    Ok(())
}

fn launch(args: &BootstrapArgs) -> LaunchStatus {
    let config = LauncherConfig {
        stack_size: args.stack_size,
        ..LauncherConfig::default()
    };
    let launcher = Launcher::new(runtime_entry(args), Arc::new(SystemProcess)).with_config(config);

    let root = args.root_dir().to_string_lossy().into_owned();
    let log_dir = args.log_dir().to_string_lossy().into_owned();

    match launcher.start_with_handle(&root, &log_dir) {
        Ok(handle) => handle.wait(),
        Err(status) => status,
    }
}

fn main() {
    let args = BootstrapArgs::parse();
    infrastructure_system_log::install(args.log_level());

    if let Err(e) = prepare_host(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let status = launch(&args);
    println!("{}", status);
    process::exit(if status.is_error() { 1 } else { 0 });
}
