//! Bootstrap Facades
//!
//! `start_erlang` is what the host calls once its listener is ready:
//!
//! ```c
//! const char *start_erlang(const char *root, const char *home);
//! const char *erlang_log_file(void);
//! ```

use std::ffi::{c_char, CStr, CString};
use std::panic;
use std::ptr;
use std::sync::{Arc, OnceLock};

use adapters_erl_start::SystemProcess;
use entities_release_layout::LaunchStatus;
use log::{error, LevelFilter};
use usecases_bootstrap::{Launcher, RuntimeEntry};

static LOG_FILE: OnceLock<CString> = OnceLock::new();

#[cfg(feature = "linked-erts")]
fn runtime_entry() -> Arc<dyn RuntimeEntry> {
    Arc::new(adapters_erl_start::LinkedErlStart)
}

#[cfg(not(feature = "linked-erts"))]
fn runtime_entry() -> Arc<dyn RuntimeEntry> {
    Arc::new(adapters_erl_start::DynamicErlStart::from_process())
}

/// Launcher wired to the real runtime and process
pub fn default_launcher() -> Launcher {
    Launcher::new(runtime_entry(), Arc::new(SystemProcess))
}

/// Borrow a C string argument as UTF-8
///
/// # Safety
/// `arg` must be null or point to a NUL-terminated string valid for `'a`.
unsafe fn c_str_arg<'a>(arg: *const c_char) -> Option<&'a str> {
    if arg.is_null() {
        return None;
    }
    CStr::from_ptr(arg).to_str().ok()
}

/// Start the embedded runtime on a background thread
///
/// Returns `"starting"` once the runtime thread is spawned, or a status
/// string describing why the release could not be launched. The returned
/// pointer is static and must not be freed.
///
/// # Safety
/// `root` and `home` must be null or NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn start_erlang(root: *const c_char, home: *const c_char) -> *const c_char {
    infrastructure_system_log::install(LevelFilter::Info);

    let (Some(root), Some(home)) = (c_str_arg(root), c_str_arg(home)) else {
        error!("start_erlang called with a null or non-UTF-8 path");
        return LaunchStatus::InvalidArguments.as_c_str().as_ptr();
    };

    let status = panic::catch_unwind(|| default_launcher().start(root, home))
        .unwrap_or(LaunchStatus::Unknown);
    status.as_c_str().as_ptr()
}

/// Location of the runtime log chosen by the first `start_erlang` call
///
/// Returns null before any launch was attempted. The returned pointer is
/// static and must not be freed.
#[no_mangle]
pub extern "C" fn erlang_log_file() -> *const c_char {
    let Some(path) = usecases_bootstrap::log_file() else {
        return ptr::null();
    };
    LOG_FILE
        .get_or_init(|| {
            CString::new(path.to_string_lossy().into_owned()).unwrap_or_default()
        })
        .as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(ptr: *const c_char) -> &'static str {
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    #[test]
    fn test_null_arguments() {
        let home = c"/tmp";
        let result = unsafe { start_erlang(ptr::null(), home.as_ptr()) };
        assert_eq!(status(result), "error_invalid_arguments");

        let result = unsafe { start_erlang(home.as_ptr(), ptr::null()) };
        assert_eq!(status(result), "error_invalid_arguments");
    }

    #[test]
    fn test_non_utf8_argument() {
        let root = CString::new(vec![0xff, 0xfe]).unwrap();
        let result = unsafe { start_erlang(root.as_ptr(), c"/tmp".as_ptr()) };
        assert_eq!(status(result), "error_invalid_arguments");
    }
}
