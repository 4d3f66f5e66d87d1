//! Release Descriptor Module
//!
//! Parses `releases/start_erl.data`, the two-token file a release ships
//! with: the erts version followed by the application version.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LayoutError;

/// Descriptor location relative to the release root
pub const DESCRIPTOR_FILE: &str = "releases/start_erl.data";

/// Size of the read buffer, including room for a terminator
///
/// At most `DESCRIPTOR_BUFFER_LEN - 1` bytes of the file are considered.
pub const DESCRIPTOR_BUFFER_LEN: usize = 128;

/// Versions named by a release descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersions {
    /// Runtime system version, first token
    pub erts_version: String,
    /// Application release version, second token
    pub app_version: String,
}

impl ReleaseVersions {
    /// Parse descriptor contents
    ///
    /// Only the first line is tokenized; anything after the second token is
    /// ignored. Content stops at the first NUL byte, as a C reader would.
    pub fn parse(contents: &[u8]) -> Result<Self, LayoutError> {
        let bounded = &contents[..contents.len().min(DESCRIPTOR_BUFFER_LEN - 1)];
        let bounded = match bounded.iter().position(|&b| b == 0) {
            Some(nul) => &bounded[..nul],
            None => bounded,
        };
        let text = String::from_utf8_lossy(bounded);
        let first_line = text.lines().next().unwrap_or_default();

        let mut tokens = first_line.split_whitespace();
        let erts_version = tokens.next().ok_or(LayoutError::MissingErtsVersion)?;
        let app_version = tokens.next().ok_or(LayoutError::MissingAppVersion)?;

        Ok(Self {
            erts_version: erts_version.to_string(),
            app_version: app_version.to_string(),
        })
    }

    /// Read and parse the descriptor at `path`
    ///
    /// Performs a single bounded read; longer files are truncated.
    pub fn read(path: &Path) -> Result<Self, LayoutError> {
        let not_found = |source| LayoutError::DescriptorNotFound {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(not_found)?;
        let mut buffer = Vec::with_capacity(DESCRIPTOR_BUFFER_LEN);
        file.take((DESCRIPTOR_BUFFER_LEN - 1) as u64)
            .read_to_end(&mut buffer)
            .map_err(not_found)?;

        Self::parse(&buffer)
    }
}
