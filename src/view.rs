/*!
Bounded views over zero-terminated strings.

A view is a run of units with a hard limit.  Its logical length is the index of the first zero unit before the limit; a view with no zero before its limit is unterminated.  Nothing in this module ever reads at or beyond the limit.
*/
use std::cmp;
use std::marker::PhantomData;
use capacity::MAX_CCH;
use encoding::Unit;
use error::Error;

/**
Returns the index of the first zero unit in `units`, if any.
*/
#[inline]
pub fn terminator<U: Unit>(units: &[U]) -> Option<usize> {
    units.iter().position(|u| u.is_zero())
}

/**
The length probe.

Scans at most `cch` units of `units` (and never past the end of the slice) for a terminator, returning its index.

# Failure

Fails with `InvalidParameter` if `cch` is zero or above `MAX_CCH`, or if no terminator is found within the scanned range.
*/
pub fn length<U: Unit>(units: &[U], cch: usize) -> Result<usize, Error> {
    if cch == 0 || cch > MAX_CCH {
        return Err(Error::InvalidParameter);
    }
    let limit = cmp::min(cch, units.len());
    terminator(&units[..limit]).ok_or(Error::InvalidParameter)
}

/**
The length probe, for foreign strings.

# Failure

As for `length`.

# Safety

`ptr` must be non-null, and every unit up to and including the terminator (or the first `cch` units, if that is fewer) must be readable.
*/
pub unsafe fn raw_length<U: Unit>(ptr: *const U, cch: usize) -> Result<usize, Error> {
    if cch == 0 || cch > MAX_CCH {
        return Err(Error::InvalidParameter);
    }
    for i in 0..cch {
        if (*ptr.offset(i as isize)).is_zero() {
            return Ok(i);
        }
    }
    Err(Error::InvalidParameter)
}

/**
Iterates over the units of a foreign string, stopping at the terminator or after `limit` units, whichever comes first.

Units are read lazily, so only as much of the string as the consumer actually pulls is ever touched.
*/
pub struct RawUnits<'a, U: 'a> {
    cur: *const U,
    left: usize,
    _marker: PhantomData<&'a U>,
}

impl<'a, U> RawUnits<'a, U> where U: Unit {
    /**
    Creates an iterator over the foreign string at `ptr`.

    # Safety

    `ptr` must be non-null, and every unit up to and including the terminator (or the first `limit` units, if that is fewer) must be readable for `'a`.
    */
    pub unsafe fn new(ptr: *const U, limit: usize) -> Self {
        RawUnits {
            cur: ptr,
            left: limit,
            _marker: PhantomData,
        }
    }

    /**
    Like `new`, for strings whose only bound is their terminator.

    # Safety

    As for `new`; the string *must* be terminated.
    */
    pub unsafe fn unbounded(ptr: *const U) -> Self {
        RawUnits::new(ptr, usize::max_value())
    }
}

impl<'a, U> Iterator for RawUnits<'a, U> where U: Unit {
    type Item = U;

    fn next(&mut self) -> Option<U> {
        if self.left == 0 {
            return None;
        }

        let unit = unsafe { *self.cur };
        if unit.is_zero() {
            self.left = 0;
            return None;
        }

        self.left -= 1;
        self.cur = unsafe { self.cur.offset(1) };
        Some(unit)
    }
}
