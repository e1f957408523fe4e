/*!
Generic routing of every operation.

Each function here normalises the caller's capacities for convention `C`, then hands exactly one core routine (`engine`, `format` or `line`) to the flag processor.  The `cch` and `cb` modules are monomorphic fronts over these.
*/
use std::iter;
use capacity::{self, Capacity};
use encoding::Unit;
use engine::{self, Mode};
use error::Error;
use ex::{self, Tail};
use flags::Flags;
use format::{self, Formatter};
use line::{self, LineSource};
use view;

/**
Length of the string in `psz`, scanning at most `max` (in convention `C`).
*/
pub fn length<C, U>(psz: &[U], max: usize) -> Result<usize, Error> where C: Capacity, U: Unit {
    let cch = capacity::normalize::<C, U>(max)?;
    let len = view::length(psz, cch)?;
    Ok(C::from_cch::<U>(len))
}

/**
Copies or appends `src` into `dest`.

`max` bounds how much of the source is read, in convention `C`.
*/
pub fn compose<C, U, I>(
    dest: Option<&mut [U]>,
    cap: usize,
    mode: Mode,
    src: Option<I>,
    max: Option<usize>,
    flags: Flags,
) -> Result<Tail, Error>
where
    C: Capacity,
    U: Unit,
    I: IntoIterator<Item=U>,
{
    let cch = capacity::normalize::<C, U>(cap)?;
    ex::run::<C, U, _>(dest, cch, flags, |dest| {
        let max = match max {
            Some(max) => Some(capacity::normalize::<C, U>(max)?),
            None => None,
        };
        match src {
            Some(src) => engine::compose(dest, cch, mode, src, max),
            None if flags.contains(Flags::IGNORE_NULLS) => engine::compose(dest, cch, mode, iter::empty(), max),
            None => Err(Error::InvalidParameter),
        }
    })
}

/**
Formats into `dest`.
*/
pub fn print<C, U, F>(dest: Option<&mut [U]>, cap: usize, formatter: Option<F>, flags: Flags) -> Result<Tail, Error>
where
    C: Capacity,
    U: Unit,
    F: Formatter<U>,
{
    let cch = capacity::normalize::<C, U>(cap)?;
    ex::run::<C, U, _>(dest, cch, flags, |dest| {
        match formatter {
            Some(formatter) => format::print(dest, cch, formatter),
            None if flags.contains(Flags::IGNORE_NULLS) => format::print(dest, cch, format_args!("")),
            None => Err(Error::InvalidParameter),
        }
    })
}

/**
Reads a line from `source` into `dest`.
*/
pub fn gets<C, U, S>(source: &mut S, dest: Option<&mut [U]>, cap: usize, flags: Flags) -> Result<Tail, Error>
where
    C: Capacity,
    U: Unit,
    S: LineSource<U> + ?Sized,
{
    let cch = capacity::normalize::<C, U>(cap)?;
    ex::run::<C, U, _>(dest, cch, flags, |dest| line::read_line(source, dest, cch))
}
