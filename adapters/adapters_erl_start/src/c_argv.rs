//! C Argument Vector Module
//!
//! Marshals an argument list into the `int argc, char **argv` pair the
//! runtime expects. The strings are owned here and handed out as mutable
//! pointers, since C `main`-style parsers are allowed to modify them.

use std::ffi::{c_char, c_int, CString};
use std::ptr;

use usecases_bootstrap::RuntimeFailure;

/// Owned, NUL-terminated `argv` array
#[derive(Debug)]
pub struct CArgv {
    /// Pointers as allocated; reclaimed on drop even if the runtime
    /// reorders `pointers`
    owned: Vec<*mut c_char>,
    /// `argc` string pointers followed by a null pointer
    pointers: Vec<*mut c_char>,
}

impl CArgv {
    /// # Errors
    /// `RuntimeFailure::Failed` if an argument contains a NUL byte or there
    /// are more arguments than fit in a C `int`.
    pub fn new(args: &[String]) -> Result<Self, RuntimeFailure> {
        c_int::try_from(args.len())
            .map_err(|_| RuntimeFailure::Failed(format!("too many arguments: {}", args.len())))?;

        let mut owned = Vec::with_capacity(args.len());
        for arg in args {
            match CString::new(arg.as_str()) {
                Ok(c_arg) => owned.push(c_arg.into_raw()),
                Err(e) => {
                    // Reclaim what was already converted before bailing out.
                    drop(CArgv {
                        owned,
                        pointers: Vec::new(),
                    });
                    return Err(RuntimeFailure::Failed(format!(
                        "argument {:?} contains a NUL byte at {}",
                        arg,
                        e.nul_position()
                    )));
                }
            }
        }

        let mut pointers = owned.clone();
        pointers.push(ptr::null_mut());

        Ok(Self { owned, pointers })
    }

    /// Number of arguments, excluding the terminating null pointer
    pub fn argc(&self) -> c_int {
        // Bounded by the check in `new`.
        self.owned.len() as c_int
    }

    /// Pointer to the first element of `argv`
    pub fn as_mut_ptr(&mut self) -> *mut *mut c_char {
        self.pointers.as_mut_ptr()
    }
}

impl Drop for CArgv {
    fn drop(&mut self) {
        for raw in self.owned.drain(..) {
            // SAFETY: every pointer in `owned` came from `CString::into_raw`
            // and is reclaimed exactly once.
            unsafe { drop(CString::from_raw(raw)) };
        }
    }
}
