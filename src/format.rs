/*!
Formatted output.

A `Formatter` is whatever produces formatted text: Rust's own `fmt::Arguments`, or, on Unix, the C library's `snprintf` and `swprintf`.  Each one reports back in its own idiom; `print` folds those idioms into the same outcome the copy engine produces, so the extended flags layer on top identically.
*/
use std::fmt;
use capacity;
use encoding::Unit;
use error::Error;

/**
What a host formatter reports after writing into a bounded buffer.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HostCount {
    /**
    The full output is this many units long.  If that is not less than the buffer length, the output was cut short.
    */
    Written(usize),

    /**
    The output did not fit; the actual length is unknown.
    */
    Overflow,

    /**
    The formatter failed partway; the buffer may hold partial output.
    */
    Failed,

    /**
    The formatter refused its input before writing anything.
    */
    Rejected,
}

/**
A source of formatted output.

Implementations must never write past the end of `buf`.  They need not terminate their output.
*/
pub trait Formatter<U> {
    fn format_into(self, buf: &mut [U]) -> HostCount;
}

/**
Writes formatted units into a fixed buffer, leaving one slot free.
*/
struct UnitSink<'a, U: 'a> {
    buf: &'a mut [U],
    pos: usize,
    overflowed: bool,
}

impl<'a, U> fmt::Write for UnitSink<'a, U> where U: Unit {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let limit = self.buf.len() - 1;
        let mut units = [U::zero(); 4];
        for c in s.chars() {
            let n = U::encode_char(c, &mut units);
            for &unit in &units[..n] {
                if self.pos == limit {
                    self.overflowed = true;
                    return Err(fmt::Error);
                }
                self.buf[self.pos] = unit;
                self.pos += 1;
            }
        }
        Ok(())
    }
}

impl<'a, U> Formatter<U> for fmt::Arguments<'a> where U: Unit {
    fn format_into(self, buf: &mut [U]) -> HostCount {
        if buf.is_empty() {
            return HostCount::Overflow;
        }

        let mut sink = UnitSink {
            buf: buf,
            pos: 0,
            overflowed: false,
        };
        match fmt::write(&mut sink, self) {
            Ok(()) => HostCount::Written(sink.pos),
            Err(_) if sink.overflowed => HostCount::Overflow,
            Err(_) => HostCount::Failed,
        }
    }
}

/**
Formats narrow output with the C library's `snprintf`.

Construct this with the `c_format!` macro, which captures the variadic arguments.
*/
#[cfg(unix)]
pub struct CFormat<'f, F> {
    format: &'f [u8],
    call: F,
}

#[cfg(unix)]
impl<'f, F> CFormat<'f, F> where F: FnOnce(*mut ::libc::c_char, usize, *const ::libc::c_char) -> ::libc::c_int {
    /**
    Wraps a call to `snprintf`.  `format` must contain a terminator; `call` receives the destination, its length, and the format.
    */
    pub fn new(format: &'f [u8], call: F) -> Self {
        CFormat {
            format: format,
            call: call,
        }
    }
}

#[cfg(unix)]
impl<'f, F> Formatter<u8> for CFormat<'f, F> where F: FnOnce(*mut ::libc::c_char, usize, *const ::libc::c_char) -> ::libc::c_int {
    fn format_into(self, buf: &mut [u8]) -> HostCount {
        if ::view::terminator(self.format).is_none() {
            return HostCount::Rejected;
        }

        let r = (self.call)(buf.as_mut_ptr() as *mut _, buf.len(), self.format.as_ptr() as *const _);
        if r < 0 {
            HostCount::Failed
        } else {
            HostCount::Written(r as usize)
        }
    }
}

/**
Formats wide output with the C library's `swprintf`.

Construct this with the `w_format!` macro, which captures the variadic arguments.
*/
#[cfg(unix)]
pub struct WFormat<'f, F> {
    format: &'f [::libc::wchar_t],
    call: F,
}

#[cfg(unix)]
impl<'f, F> WFormat<'f, F> where F: FnOnce(*mut ::libc::wchar_t, usize, *const ::libc::wchar_t) -> ::libc::c_int {
    /**
    Wraps a call to `swprintf`.  `format` must contain a terminator; `call` receives the destination, its length, and the format.
    */
    pub fn new(format: &'f [::libc::wchar_t], call: F) -> Self {
        WFormat {
            format: format,
            call: call,
        }
    }
}

#[cfg(unix)]
impl<'f, F> Formatter<::libc::wchar_t> for WFormat<'f, F> where F: FnOnce(*mut ::libc::wchar_t, usize, *const ::libc::wchar_t) -> ::libc::c_int {
    fn format_into(self, buf: &mut [::libc::wchar_t]) -> HostCount {
        if ::view::terminator(self.format).is_none() {
            return HostCount::Rejected;
        }

        // `swprintf` reports truncation with -1 too; only `errno` tells it from bad input.
        ::ffi::clear_errno();
        let r = (self.call)(buf.as_mut_ptr(), buf.len(), self.format.as_ptr());
        if r >= 0 {
            return HostCount::Written(r as usize);
        }
        match ::ffi::errno() {
            0 | ::libc::EOVERFLOW | ::libc::E2BIG => HostCount::Overflow,
            errno => {
                debug!("swprintf failed with errno {}", errno);
                HostCount::Failed
            },
        }
    }
}

/**
The format adapter.

Runs `format` against the first `cch` units of `dest` and returns the index of the terminator.

# Failure

Fails with `InvalidParameter`, without writing anything, if `cch` is not a valid capacity for `dest`.

Fails with `InsufficientBuffer` if the output did not fit; the destination then holds the output's first `cch - 1` units, terminated.

Fails with `InvalidParameter` if the formatter failed; the destination is left empty.  If the formatter refused its input before writing, the destination is left untouched.
*/
pub fn print<U, F>(dest: &mut [U], cch: usize, format: F) -> Result<usize, Error>
where
    U: Unit,
    F: Formatter<U>,
{
    capacity::check(dest.len(), cch)?;
    let dest = &mut dest[..cch];

    match format.format_into(dest) {
        HostCount::Written(n) if n < cch => {
            dest[n] = U::zero();
            Ok(n)
        },
        HostCount::Written(_) | HostCount::Overflow => {
            dest[cch - 1] = U::zero();
            Err(Error::InsufficientBuffer)
        },
        HostCount::Failed => {
            debug!("host formatter failed");
            dest[0] = U::zero();
            Err(Error::InvalidParameter)
        },
        HostCount::Rejected => {
            debug!("host formatter rejected its input");
            Err(Error::InvalidParameter)
        },
    }
}
