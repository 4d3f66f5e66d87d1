//! Adapters Layer: erl_start Binding
//!
//! Real implementations of the bootstrap's two seams:
//!
//! - [`DynamicErlStart`] / `LinkedErlStart`: [`RuntimeEntry`] implementations
//!   calling `void erl_start(int argc, char **argv)`
//! - [`SystemProcess`]: [`ProcessHost`] implementation mutating this process
//!
//! `LinkedErlStart` is only built with the `linked-erts` feature, since it
//! requires the runtime to be present at link time.
//!
//! [`RuntimeEntry`]: usecases_bootstrap::RuntimeEntry
//! [`ProcessHost`]: usecases_bootstrap::ProcessHost

pub mod c_argv;
pub mod dynamic;
#[cfg(feature = "linked-erts")]
pub mod linked;
pub mod process;

pub use c_argv::CArgv;
pub use dynamic::{DynamicErlStart, EntrySource, ErlStartFn, ERL_START_SYMBOL};
#[cfg(feature = "linked-erts")]
pub use linked::LinkedErlStart;
pub use process::SystemProcess;
