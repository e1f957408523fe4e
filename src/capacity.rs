/*!
Capacity conventions.

Callers size buffers in one of two ways: as a count of code units ("cch") or as a count of bytes ("cb").  Both are normalised to a unit count on entry, and reported figures are converted back on exit, so the state machine underneath only ever deals in units.
*/
use std::mem;
use encoding::Unit;
use error::Error;

/**
The largest capacity, in code units, any operation accepts.
*/
pub const MAX_CCH: usize = 0x7fffffff;

/**
Abstracts over the two ways of expressing capacity.

This is implemented by marker types which are never instantiated.
*/
pub trait Capacity {
    /**
    Returns the name stem used for this convention in foreign names; `Cch` or `Cb`.
    */
    fn debug_prefix() -> &'static str;

    /**
    Converts a capacity in this convention into code units.  Any trailing partial unit is discarded.
    */
    fn to_cch<U: Unit>(n: usize) -> usize;

    /**
    Converts a count of code units into this convention.
    */
    fn from_cch<U: Unit>(cch: usize) -> usize;

    /**
    The largest capacity accepted, in this convention.
    */
    fn ceiling<U: Unit>() -> usize;
}

/**
Capacities counted in code units.
*/
pub enum Cch {}

impl Capacity for Cch {
    fn debug_prefix() -> &'static str { "Cch" }

    #[inline]
    fn to_cch<U: Unit>(n: usize) -> usize {
        n
    }

    #[inline]
    fn from_cch<U: Unit>(cch: usize) -> usize {
        cch
    }

    #[inline]
    fn ceiling<U: Unit>() -> usize {
        MAX_CCH
    }
}

/**
Capacities counted in bytes.
*/
pub enum Cb {}

impl Capacity for Cb {
    fn debug_prefix() -> &'static str { "Cb" }

    #[inline]
    fn to_cch<U: Unit>(n: usize) -> usize {
        n / mem::size_of::<U>()
    }

    #[inline]
    fn from_cch<U: Unit>(cch: usize) -> usize {
        cch * mem::size_of::<U>()
    }

    #[inline]
    fn ceiling<U: Unit>() -> usize {
        MAX_CCH.saturating_mul(mem::size_of::<U>())
    }
}

/**
Normalises a caller-supplied count into code units.

Zero is passed through; whether it is acceptable depends on what the count describes.

# Failure

Fails with `InvalidParameter` if `n` is above the ceiling for its convention.
*/
pub fn normalize<C, U>(n: usize) -> Result<usize, Error> where C: Capacity, U: Unit {
    if n > C::ceiling::<U>() {
        return Err(Error::InvalidParameter);
    }
    Ok(C::to_cch::<U>(n))
}

/**
Checks that `cch` is a usable destination capacity for a buffer of `len` units.

# Failure

Fails with `InvalidParameter` if `cch` is zero, above `MAX_CCH`, or larger than the buffer.
*/
#[inline]
pub fn check(len: usize, cch: usize) -> Result<(), Error> {
    if cch == 0 || cch > MAX_CCH || cch > len {
        Err(Error::InvalidParameter)
    } else {
        Ok(())
    }
}
