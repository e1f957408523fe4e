//! Host C formatter entry points, for use by `c_format!` and `w_format!`.
pub use libc::{c_char, c_int, size_t, wchar_t};

#[cfg(unix)]
pub use libc::snprintf;

#[cfg(unix)]
extern "C" {
    // Not exposed by `libc`.
    pub fn swprintf(dest: *mut wchar_t, n: size_t, format: *const wchar_t, ...) -> c_int;
}

#[cfg(any(target_os="linux", target_os="emscripten", target_os="redox"))]
use libc::__errno_location as errno_location;
#[cfg(any(target_os="macos", target_os="ios", target_os="freebsd", target_os="dragonfly"))]
use libc::__error as errno_location;
#[cfg(any(target_os="android", target_os="netbsd", target_os="openbsd"))]
use libc::__errno as errno_location;

/**
Resets `errno` to zero, so a later failure can be told apart from a stale code.

This is a no-op on platforms where `libc` does not expose the `errno` location.
*/
#[cfg(unix)]
pub fn clear_errno() {
    clear_errno_impl();
}

#[cfg(any(target_os="linux", target_os="emscripten", target_os="redox",
    target_os="macos", target_os="ios", target_os="freebsd", target_os="dragonfly",
    target_os="android", target_os="netbsd", target_os="openbsd"))]
fn clear_errno_impl() {
    unsafe { *errno_location() = 0; }
}

#[cfg(all(unix, not(any(target_os="linux", target_os="emscripten", target_os="redox",
    target_os="macos", target_os="ios", target_os="freebsd", target_os="dragonfly",
    target_os="android", target_os="netbsd", target_os="openbsd"))))]
fn clear_errno_impl() {}

/**
The calling thread's current `errno`.
*/
#[cfg(unix)]
pub fn errno() -> c_int {
    ::std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}
