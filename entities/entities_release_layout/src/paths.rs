//! Release Paths Module
//!
//! Derives the config, boot and library locations of a release. The runtime
//! is handed the config and boot paths without their extensions, while the
//! readability checks need the full file names.

use std::path::PathBuf;

use crate::descriptor::DESCRIPTOR_FILE;

/// Paths inside a release for one application version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePaths {
    root: String,
    app_version: String,
}

impl ReleasePaths {
    /// # Arguments
    /// * `root` - Normalized release root (ending in `/`)
    /// * `app_version` - Second token of the release descriptor
    pub fn new(root: &str, app_version: &str) -> Self {
        Self {
            root: root.to_string(),
            app_version: app_version.to_string(),
        }
    }

    /// `releases/start_erl.data` under `root`
    pub fn descriptor(root: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", root, DESCRIPTOR_FILE))
    }

    fn release_dir(&self) -> String {
        format!("{}releases/{}/", self.root, self.app_version)
    }

    /// Config path as passed to `-config` (no `.config` suffix)
    pub fn config_base(&self) -> String {
        format!("{}sys", self.release_dir())
    }

    /// The `sys.config` file itself
    pub fn config_file(&self) -> PathBuf {
        PathBuf::from(format!("{}.config", self.config_base()))
    }

    /// Boot path as passed to `-boot` (no `.boot` suffix)
    pub fn boot_base(&self) -> String {
        format!("{}start", self.release_dir())
    }

    /// The `start.boot` file itself
    pub fn boot_file(&self) -> PathBuf {
        PathBuf::from(format!("{}.boot", self.boot_base()))
    }

    /// Library directory, bound to `RELEASE_LIB`
    pub fn lib_dir(&self) -> String {
        format!("{}lib", self.root)
    }
}
