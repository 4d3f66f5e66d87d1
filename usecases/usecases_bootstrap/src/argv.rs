//! Runtime Argument Vector Module
//!
//! Builds the command line handed to `erl_start()`. The token order is fixed
//! by the runtime's argument parser: `--` separates emulator, init and
//! user flags, and `-extra` ends init's own processing.

/// `argv[0]` as seen by the runtime
pub const PROGRAM_NAME: &str = "test_main";

/// Values substituted into the argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeArgs {
    /// Normalized release root
    pub root: String,
    /// Home directory (`HOME` or the release fallback)
    pub home: String,
    /// Config path without the `.config` suffix
    pub config: String,
    /// Boot path without the `.boot` suffix
    pub boot: String,
    /// Runtime binary directory
    pub bindir: String,
    /// Release library directory, bound to `RELEASE_LIB`
    pub lib: String,
}

impl RuntimeArgs {
    /// Build argument vector for erl_start()
    pub fn to_argv(&self) -> Vec<String> {
        let root = self.root.as_str();
        let home = self.home.as_str();
        let config = self.config.as_str();
        let boot = self.boot.as_str();
        let bindir = self.bindir.as_str();
        let lib = self.lib.as_str();

        [
            PROGRAM_NAME, "-sbwt", "none", "-MIscs", "10",
            "--", "-root", root, "-progname", "erl",
            "--", "-home", home, "--",
            "-kernel", "shell_history", "enabled",
            "--", "-elixir", "ansi_enabled", "true",
            "-noshell", "-s", "elixir", "start_cli",
            "-mode", "interactive", "-config", config,
            "-boot", boot, "-bindir", bindir,
            "-boot_var", "RELEASE_LIB", lib,
            "--", "--", "-extra", "--no-halt",
        ]
        .iter()
        .map(|arg| arg.to_string())
        .collect()
    }
}
