//! Host Environment Module
//!
//! Environment the runtime expects its host to provide before launch.
//! Replaces the platform shell's `setenv` calls.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::HostSetupError;

/// Resolver configuration: EDNS on, Google DNS as fallback, DNS-only lookup
pub const INETRC_CONTENTS: &str = "\
%% enable EDNS, 0 means enable YES!
{edns,0}.
{alt_nameserver, {8,8,8,8}}.
%% specify lookup method
{lookup, [dns]}.
";

/// Write `inetrc` into `app_dir`, returning its path
pub fn write_inetrc(app_dir: &Path) -> Result<PathBuf, HostSetupError> {
    fs::create_dir_all(app_dir).map_err(HostSetupError::io("create", app_dir))?;
    let inetrc = app_dir.join("inetrc");
    fs::write(&inetrc, INETRC_CONTENTS).map_err(HostSetupError::io("write", &inetrc))?;
    Ok(inetrc)
}

/// Variables exported to the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    /// Persistent home, survives app upgrades
    pub home: PathBuf,
    /// Runtime binary directory; unused by an embedded runtime but required
    pub bindir: PathBuf,
    /// Reported to the application as `ELIXIR_DESKTOP_OS`
    pub os_name: String,
    /// Port of the host's bridge listener, if it runs one
    pub bridge_port: Option<u16>,
    /// Resolver configuration written by [`write_inetrc`]
    pub inetrc: Option<PathBuf>,
}

impl HostEnvironment {
    /// Defaults for `home`: `BINDIR` is `<home>/bin`, OS name is this platform's
    pub fn new(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            bindir: home.join("bin"),
            home,
            os_name: env::consts::OS.to_string(),
            bridge_port: None,
            inetrc: None,
        }
    }

    /// Name/value pairs in the order they are exported
    pub fn variables(&self) -> Vec<(&'static str, String)> {
        let mut vars = Vec::with_capacity(5);
        if let Some(inetrc) = &self.inetrc {
            vars.push(("ERL_INETRC", inetrc.to_string_lossy().into_owned()));
        }
        vars.push(("ELIXIR_DESKTOP_OS", self.os_name.clone()));
        if let Some(port) = self.bridge_port {
            vars.push(("BRIDGE_PORT", port.to_string()));
        }
        vars.push(("HOME", self.home.to_string_lossy().into_owned()));
        vars.push(("BINDIR", self.bindir.to_string_lossy().into_owned()));
        vars
    }

    /// Export [`variables`](Self::variables) into this process
    pub fn apply(&self) {
        for (name, value) in self.variables() {
            info!("setenv {} {}", name, value);
            env::set_var(name, value);
        }
    }
}
