/*!
This crate provides bounded string composition for zero-terminated strings: copying, appending, formatting, line input and length probing, each taking an explicit destination capacity and never writing past it.

Every operation leaves the destination terminated whenever it writes at all, tells truncation apart from success, and can be asked, through `Flags`, to leave the destination in a specific state on failure.

For more details, see the [additional documentation](doc/index.html).

# Quick Reference

Operations come in two capacity conventions, as modules, and any number of unit widths, as type parameters.

| Module | Capacities and `remaining` counted in | Narrow (`u8`) | Wide (`WChar`) |
| --- | --- | --- | --- |
| `cch` | code units | `cch::copy(&mut [u8], ..)` | `cch::copy(&mut [WChar], ..)` |
| `cb` | bytes | `cb::copy(&mut [u8], ..)` | `cb::copy(&mut [WChar], ..)` |

| Operation | Plain | Extended |
| --- | --- | --- |
| Copy | `copy`, `copy_n` | `copy_ex`, `copy_n_ex` |
| Append | `cat`, `cat_n` | `cat_ex`, `cat_n_ex` |
| Line input | `gets`, `gets_from` | `gets_ex`, `gets_from_ex` |
| Formatting | `string_cch_printf!`, `vprintf` | `string_cch_printf_ex!`, `vprintf_ex` |
| Length | `length` | |

```
#[macro_use] extern crate strsafe;
use strsafe::{cch, Error};

fn main() {
    let mut buf = [0u8; 8];
    cch::copy(&mut buf, 8, b"Hello").unwrap();
    assert_eq!(cch::cat(&mut buf, 8, b" World"), Err(Error::InsufficientBuffer));
    assert_eq!(&buf, b"Hello W\0");

    assert!(string_cch_printf!(&mut buf[..], 8, "{}-{}", 4, 2).is_ok());
    assert_eq!(&buf[..4], b"4-2\0");
}
```

With the default `capi` feature, the strsafe C entry points (`StringCchCopyA`, `StringCbCatExW`, ...) are exported with C linkage; see the `capi` module.
*/
extern crate libc;
#[macro_use] extern crate log;

/**
Formats into a destination whose capacity is counted in code units.

Expands to `cch::vprintf(dest, cch, format_args!(...))`.
*/
#[macro_export]
macro_rules! string_cch_printf {
    ($dest:expr, $cch:expr, $($fmt:tt)+) => {
        $crate::cch::vprintf($dest, $cch, format_args!($($fmt)+))
    };
}

/**
Formats into a destination whose capacity is counted in bytes.
*/
#[macro_export]
macro_rules! string_cb_printf {
    ($dest:expr, $cb:expr, $($fmt:tt)+) => {
        $crate::cb::vprintf($dest, $cb, format_args!($($fmt)+))
    };
}

/**
Extended form of `string_cch_printf!`.  `dest` is an `Option`; `flags` is a `Flags`.
*/
#[macro_export]
macro_rules! string_cch_printf_ex {
    ($dest:expr, $cch:expr, $flags:expr, $($fmt:tt)+) => {
        $crate::cch::vprintf_ex($dest, $cch, $flags, Some(format_args!($($fmt)+)))
    };
}

#[macro_export]
macro_rules! string_cb_printf_ex {
    ($dest:expr, $cb:expr, $flags:expr, $($fmt:tt)+) => {
        $crate::cb::vprintf_ex($dest, $cb, $flags, Some(format_args!($($fmt)+)))
    };
}

/**
Builds a narrow formatter that calls the C library's `snprintf`.

The first argument is a zero-terminated byte string holding a C format; the rest are passed through as C variadic arguments, so they must already have C types.

```
#[macro_use] extern crate strsafe;
extern crate libc;

fn main() {
    let mut buf = [0u8; 16];
    strsafe::cch::vprintf(&mut buf, 16, c_format!(b"%d-%s\0", 42 as libc::c_int, b"x\0".as_ptr())).unwrap();
    assert_eq!(&buf[..5], b"42-x\0");
}
```
*/
#[cfg(unix)]
#[macro_export]
macro_rules! c_format {
    ($format:expr $(, $arg:expr)* $(,)*) => {
        $crate::format::CFormat::new($format, |dest: *mut $crate::ffi::c_char, n: usize, format: *const $crate::ffi::c_char| unsafe {
            $crate::ffi::snprintf(dest, n, format $(, $arg)*)
        })
    };
}

/**
Builds a wide formatter that calls the C library's `swprintf`.

The first argument is a zero-terminated `WChar` slice holding a C wide format.
*/
#[cfg(unix)]
#[macro_export]
macro_rules! w_format {
    ($format:expr $(, $arg:expr)* $(,)*) => {
        $crate::format::WFormat::new($format, |dest: *mut $crate::ffi::wchar_t, n: usize, format: *const $crate::ffi::wchar_t| unsafe {
            $crate::ffi::swprintf(dest, n, format $(, $arg)*)
        })
    };
}

pub mod capacity;
pub mod cb;
pub mod cch;
#[doc(hidden)] pub mod doc;
pub mod encoding;
pub mod engine;
pub mod error;
pub mod ex;
pub mod flags;
pub mod format;
pub mod line;
pub mod view;

#[cfg(feature="capi")]
pub mod capi;
#[doc(hidden)] pub mod ffi;

mod ops;

pub use capacity::MAX_CCH;
pub use encoding::{Unit, WChar};
pub use error::{Error, HRESULT, failed, hresult, succeeded};
pub use ex::Tail;
pub use flags::Flags;
pub use format::Formatter;
pub use line::LineSource;
