//! Command-Line Argument Parsing Module
//!
//! Arguments of the `erl_launcher` desktop launcher. Uses clap for
//! type-safe argument parsing.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Embedded runtime launcher arguments
#[derive(Parser, Debug)]
#[command(name = "erl_launcher")]
#[command(about = "Launch a bundled Erlang/Elixir release through erl_start()")]
pub struct BootstrapArgs {
    /// Persistent home directory (exported as HOME; BINDIR is <home>/bin)
    #[arg(long)]
    pub home: PathBuf,

    /// Release root; defaults to <home>/app
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory for the runtime log; defaults to the home directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Release archive to install into the release root
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Shared library providing erl_start; the process image when omitted
    #[arg(long)]
    pub runtime_library: Option<PathBuf>,

    /// Override BINDIR
    #[arg(long)]
    pub bindir: Option<PathBuf>,

    /// Value of ELIXIR_DESKTOP_OS; defaults to the build platform
    #[arg(long)]
    pub os_name: Option<String>,

    /// Value of BRIDGE_PORT
    #[arg(long)]
    pub bridge_port: Option<u16>,

    /// Stack size of the runtime thread, in bytes
    #[arg(long)]
    pub stack_size: Option<usize>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl BootstrapArgs {
    /// Release root, defaulting to `<home>/app`
    pub fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| self.home.join("app"))
    }

    /// Log directory, defaulting to the home directory
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| self.home.clone())
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
