//! Release Archive Module
//!
//! Hosts ship the release as a zip inside the application bundle and unpack
//! it into a writable app directory. The archive is unpacked again whenever
//! it differs from the one last installed, identified by its modification
//! time.

use std::fs::{self, File};
use std::path::Path;
use std::time::UNIX_EPOCH;

use entities_release_layout::DESCRIPTOR_FILE;
use log::info;
use zip::ZipArchive;

use crate::error::HostSetupError;

/// Stamp file written into the app directory after each extraction
pub const STAMP_FILE: &str = ".release_stamp";

/// What [`install_release`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveInstall {
    /// No release was installed; the archive was extracted
    Extracted,
    /// A different archive was installed; the app directory was replaced
    Replaced,
    /// The installed release came from this archive
    UpToDate,
}

fn archive_stamp(archive: &Path) -> Result<String, HostSetupError> {
    let modified = fs::metadata(archive)
        .and_then(|meta| meta.modified())
        .map_err(HostSetupError::io("stat", archive))?;
    let seconds = modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    Ok(seconds.to_string())
}

fn extract(archive: &Path, app_dir: &Path, stamp: &str) -> Result<(), HostSetupError> {
    let file = File::open(archive).map_err(HostSetupError::io("open", archive))?;
    let invalid = |source| HostSetupError::Archive {
        path: archive.to_path_buf(),
        source,
    };

    fs::create_dir_all(app_dir).map_err(HostSetupError::io("create", app_dir))?;
    ZipArchive::new(file)
        .map_err(invalid)?
        .extract(app_dir)
        .map_err(invalid)?;

    let stamp_file = app_dir.join(STAMP_FILE);
    fs::write(&stamp_file, stamp).map_err(HostSetupError::io("write", &stamp_file))?;
    info!("Successfully extracted app files to: {}", app_dir.display());
    Ok(())
}

/// Make sure `app_dir` holds the release packed in `archive`
pub fn install_release(archive: &Path, app_dir: &Path) -> Result<ArchiveInstall, HostSetupError> {
    let stamp = archive_stamp(archive)?;

    if !app_dir.join(DESCRIPTOR_FILE).exists() {
        extract(archive, app_dir, &stamp)?;
        return Ok(ArchiveInstall::Extracted);
    }

    let installed = fs::read_to_string(app_dir.join(STAMP_FILE)).unwrap_or_default();
    if installed.trim() == stamp {
        return Ok(ArchiveInstall::UpToDate);
    }

    info!(
        "release archive changed (installed {:?}, bundled {}), reinstalling",
        installed.trim(),
        stamp
    );
    fs::remove_dir_all(app_dir).map_err(HostSetupError::io("remove", app_dir))?;
    extract(archive, app_dir, &stamp)?;
    Ok(ArchiveInstall::Replaced)
}
