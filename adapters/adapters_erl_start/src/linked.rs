//! Link-time erl_start Binding
//!
//! For hosts that link the runtime statically and strip unexported symbols,
//! so a run-time lookup in the process image would fail.

use std::ffi::{c_char, c_int};

use log::info;
use usecases_bootstrap::{RuntimeEntry, RuntimeFailure};

use crate::c_argv::CArgv;

extern "C" {
    fn erl_start(argc: c_int, argv: *mut *mut c_char);
}

/// [`RuntimeEntry`] calling the `erl_start` resolved by the linker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkedErlStart;

impl RuntimeEntry for LinkedErlStart {
    fn run(&self, argv: &[String]) -> Result<(), RuntimeFailure> {
        let mut c_argv = CArgv::new(argv)?;
        info!("calling linked erl_start with {} arguments", c_argv.argc());

        // SAFETY: `c_argv` outlives the call and is NUL-terminated.
        unsafe { erl_start(c_argv.argc(), c_argv.as_mut_ptr()) };

        Ok(())
    }
}
