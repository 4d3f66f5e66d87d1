//! Entities Layer: Release Layout
//!
//! Core data types describing a bundled runtime release on disk and the
//! outcome of a launch attempt.
//!
//! ## Modules
//!
//! - **[`request`](request/index.html)**: Launch request and directory normalization
//! - **[`descriptor`](descriptor/index.html)**: `releases/start_erl.data` parsing
//! - **[`paths`](paths/index.html)**: Derived release paths (config, boot, lib)
//! - **[`status`](status/index.html)**: Launch status vocabulary shared with the host
//! - **[`error`](error/index.html)**: Layout validation errors
//!
//! This crate has no knowledge of threads, environment variables or the
//! foreign runtime; those live in the use cases and adapters layers.

pub mod descriptor;
pub mod error;
pub mod paths;
pub mod request;
pub mod status;

pub use descriptor::{ReleaseVersions, DESCRIPTOR_BUFFER_LEN, DESCRIPTOR_FILE};
pub use error::LayoutError;
pub use paths::ReleasePaths;
pub use request::{ensure_trailing_separator, normalize_dir, LaunchRequest, LOG_FILE_NAME};
pub use status::LaunchStatus;
