//! Process State Module
//!
//! [`ProcessHost`] for the real process. Every mutation here applies to the
//! whole process and cannot be undone: the runtime reads `PATH` and the
//! working directory internally once it is running.

use std::env;
use std::io;
use std::path::Path;

use usecases_bootstrap::ProcessHost;

/// The current process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcess;

impl ProcessHost for SystemProcess {
    fn install_path(&self, path: &str) {
        env::set_var("PATH", path);
    }

    #[cfg(unix)]
    fn enter_directory(&self, dir: &Path) -> io::Result<()> {
        nix::unistd::chdir(dir).map_err(io::Error::from)
    }

    #[cfg(not(unix))]
    fn enter_directory(&self, dir: &Path) -> io::Result<()> {
        env::set_current_dir(dir)
    }

    #[cfg(unix)]
    fn is_readable(&self, path: &Path) -> bool {
        use nix::unistd::{access, AccessFlags};

        access(path, AccessFlags::R_OK).is_ok()
    }

    #[cfg(not(unix))]
    fn is_readable(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_readable() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("sys.config");
        std::fs::write(&file, "[].").unwrap();

        assert!(SystemProcess.is_readable(&file));
        assert!(SystemProcess.is_readable(dir.path()));
        assert!(!SystemProcess.is_readable(&dir.path().join("start.boot")));
    }

    #[test]
    fn test_enter_missing_directory() {
        let dir = TempDir::new().unwrap();
        assert!(SystemProcess
            .enter_directory(&dir.path().join("missing"))
            .is_err());
    }
}
