/*!
Result codes.

Every operation in this crate returns `Result<_, Error>`.  Foreign callers see the same outcome as an `HRESULT` bitfield; the values below are part of the ABI and must not change.
*/
use std::error::Error as StdError;
use std::fmt::{self, Display};

/**
The wire representation of an operation's outcome.

Bits are disjoint, so conditions could in principle be OR'd together, but no operation ever reports more than one.
*/
#[allow(non_camel_case_types)]
pub type HRESULT = u32;

pub const S_OK: HRESULT = 0x00000000;
pub const STRSAFE_E_END_OF_FILE: HRESULT = 0x00000001;
pub const STRSAFE_E_INVALID_PARAMETER: HRESULT = 0x00000002;
pub const STRSAFE_E_INSUFFICIENT_BUFFER: HRESULT = 0x00000004;

/**
Returns `true` if `hr` reports success.
*/
#[inline]
pub fn succeeded(hr: HRESULT) -> bool {
    hr == S_OK
}

/**
Returns `true` if `hr` reports any failure.
*/
#[inline]
pub fn failed(hr: HRESULT) -> bool {
    hr != S_OK
}

/**
Collapses a result into its wire code.
*/
pub fn hresult<T>(result: &Result<T, Error>) -> HRESULT {
    match *result {
        Ok(_) => S_OK,
        Err(err) => err.code(),
    }
}

/**
Ways an operation can fail.

`InvalidParameter` is a static contract violation: a zero or over-ceiling capacity, an unterminated destination on an append, a missing string without `IGNORE_NULLS`, or a formatting error reported by the host formatter.

`InsufficientBuffer` is a soft failure.  Unless the flags say otherwise, the destination holds a terminated prefix of the intended content.

`EndOfFile` is only reported by the line readers, when input ends before a single unit was read.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    EndOfFile,
    InvalidParameter,
    InsufficientBuffer,
}

impl Error {
    /**
    Returns the wire code for this error.
    */
    pub fn code(self) -> HRESULT {
        match self {
            Error::EndOfFile => STRSAFE_E_END_OF_FILE,
            Error::InvalidParameter => STRSAFE_E_INVALID_PARAMETER,
            Error::InsufficientBuffer => STRSAFE_E_INSUFFICIENT_BUFFER,
        }
    }

    /**
    Recovers an error from a wire code.

    Returns `None` for `S_OK`, and for codes with no single matching error.
    */
    pub fn from_code(hr: HRESULT) -> Option<Error> {
        match hr {
            STRSAFE_E_END_OF_FILE => Some(Error::EndOfFile),
            STRSAFE_E_INVALID_PARAMETER => Some(Error::InvalidParameter),
            STRSAFE_E_INSUFFICIENT_BUFFER => Some(Error::InsufficientBuffer),
            _ => None,
        }
    }
}

impl From<Error> for HRESULT {
    fn from(err: Error) -> Self {
        err.code()
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            Error::EndOfFile => "end of input reached before any data was read",
            Error::InvalidParameter => "invalid parameter",
            Error::InsufficientBuffer => "destination buffer too small; result truncated",
        };
        fmt.write_str(msg)
    }
}

impl StdError for Error {}
