/*!
Code units and string families.

Every operation is generic over the code unit type.  The unit is fixed by the slices passed in, so `&mut [u8]` selects the narrow family and `&mut [WChar]` the wide one.  No encoding is ever validated or converted: units are copied verbatim, and truncation happens on unit boundaries.
*/
use std::mem;
use libc::wchar_t;

/**
The platform wide character.

This is 16 bits on Windows and 32 bits (signed) on most Unix systems.
*/
pub type WChar = wchar_t;

/**
A single element of a zero-terminated string.
*/
pub trait Unit: Copy + PartialEq {
    /**
    The terminator.
    */
    fn zero() -> Self;

    fn is_zero(&self) -> bool;

    /**
    Widens a byte read from a byte-oriented source into a unit.  This is the identity on the byte's value.
    */
    fn from_byte(b: u8) -> Self;

    /**
    Returns the unit whose every byte is `b`.

    Fills are specified in bytes (the way `memset` works), so a wide fill of `0xCC` produces `0xCCCC` or `0xCCCCCCCC`.
    */
    fn splat(b: u8) -> Self;

    /**
    Encodes `c` into `buf`, returning the number of units used.

    Narrow units receive UTF-8, 16-bit units receive UTF-16, and 32-bit units receive the scalar value.
    */
    fn encode_char(c: char, buf: &mut [Self; 4]) -> usize;
}

macro_rules! unit_impl {
    ($ty_name:ty, $encode:expr) => {
        impl Unit for $ty_name {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }

            #[inline]
            fn from_byte(b: u8) -> Self {
                b as $ty_name
            }

            #[inline]
            fn splat(b: u8) -> Self {
                <$ty_name>::from_ne_bytes([b; mem::size_of::<$ty_name>()])
            }

            #[inline]
            fn encode_char(c: char, buf: &mut [Self; 4]) -> usize {
                $encode(c, buf)
            }
        }
    };
}

unit_impl! { u8, |c: char, buf: &mut [u8; 4]| c.encode_utf8(buf).len() }
unit_impl! { u16, |c: char, buf: &mut [u16; 4]| c.encode_utf16(buf).len() }
unit_impl! { u32, |c: char, buf: &mut [u32; 4]| { buf[0] = c as u32; 1 } }
unit_impl! { i32, |c: char, buf: &mut [i32; 4]| { buf[0] = c as u32 as i32; 1 } }
