//! Dynamic erl_start Binding
//!
//! Resolves `erl_start` when the runtime thread starts. On mobile targets the
//! runtime is linked into the application binary and the symbol is found in
//! the process image; desktop hosts can point at a shared library instead.

use std::ffi::{c_char, c_int};
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use log::info;
use usecases_bootstrap::{RuntimeEntry, RuntimeFailure};

use crate::c_argv::CArgv;

/// Signature of the runtime's process entry point
pub type ErlStartFn = unsafe extern "C" fn(argc: c_int, argv: *mut *mut c_char);

/// NUL-terminated symbol name
pub const ERL_START_SYMBOL: &[u8] = b"erl_start\0";

/// Where `erl_start` is looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    /// The running executable and the libraries already loaded into it
    ProcessImage,
    /// A shared library loaded on demand
    Library(PathBuf),
}

/// [`RuntimeEntry`] resolving `erl_start` at run time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicErlStart {
    source: EntrySource,
}

impl DynamicErlStart {
    pub fn from_process() -> Self {
        Self {
            source: EntrySource::ProcessImage,
        }
    }

    pub fn from_library(path: impl AsRef<Path>) -> Self {
        Self {
            source: EntrySource::Library(path.as_ref().to_path_buf()),
        }
    }

    pub fn source(&self) -> &EntrySource {
        &self.source
    }

    fn open(&self) -> Result<Library, RuntimeFailure> {
        match &self.source {
            EntrySource::ProcessImage => open_process_image(),
            EntrySource::Library(path) => {
                // SAFETY: loading runs the library's initializers; the host
                // chose this library as its runtime.
                unsafe { Library::new(path) }.map_err(|e| {
                    RuntimeFailure::Failed(format!(
                        "failed to load runtime library {}: {}",
                        path.display(),
                        e
                    ))
                })
            }
        }
    }
}

#[cfg(unix)]
fn open_process_image() -> Result<Library, RuntimeFailure> {
    Ok(libloading::os::unix::Library::this().into())
}

#[cfg(windows)]
fn open_process_image() -> Result<Library, RuntimeFailure> {
    libloading::os::windows::Library::this()
        .map(Library::from)
        .map_err(|e| RuntimeFailure::Failed(format!("failed to open process image: {}", e)))
}

impl RuntimeEntry for DynamicErlStart {
    fn run(&self, argv: &[String]) -> Result<(), RuntimeFailure> {
        let library = self.open()?;

        // SAFETY: the symbol is declared with the runtime's C signature.
        let erl_start: Symbol<ErlStartFn> = unsafe { library.get(ERL_START_SYMBOL) }
            .map_err(|e| RuntimeFailure::Failed(format!("erl_start not found: {}", e)))?;

        let mut c_argv = CArgv::new(argv)?;
        info!("calling erl_start with {} arguments", c_argv.argc());

        // SAFETY: `c_argv` outlives the call and is NUL-terminated; the
        // library stays loaded until `library` is dropped after the call.
        unsafe { erl_start(c_argv.argc(), c_argv.as_mut_ptr()) };

        Ok(())
    }
}
