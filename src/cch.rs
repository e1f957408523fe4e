/*!
Operations with capacities counted in code units.

Every capacity passed in, and every `remaining` count passed out, is a number of units of the string's own type: bytes for `u8` strings, wide characters for `WChar` strings.

The plain forms behave exactly like their `_ex` siblings called with no flags.
*/
use std::io;
use capacity::Cch;
use encoding::Unit;
use engine::Mode;
use error::Error;
use ex::Tail;
use flags::Flags;
use format::Formatter;
use line::LineSource;
use ops;

/**
Returns the length of `psz`, in units, scanning at most `max` units.

# Failure

Fails with `InvalidParameter` if `max` is zero or above `MAX_CCH`, or if no terminator appears within the first `max` units (or before the end of `psz`).
*/
pub fn length<U: Unit>(psz: &[U], max: usize) -> Result<usize, Error> {
    ops::length::<Cch, U>(psz, max)
}

/**
Copies `src` into `dest`, always leaving `dest` terminated.

`src` ends at its first zero unit, or at the end of the slice.

# Failure

Fails with `InvalidParameter` if `cch_dest` is zero, above `MAX_CCH`, or larger than `dest`.

Fails with `InsufficientBuffer` if `src` does not fit; `dest` then holds as much of it as fits, terminated.
*/
pub fn copy<U: Unit>(dest: &mut [U], cch_dest: usize, src: &[U]) -> Result<(), Error> {
    copy_ex(Some(dest), cch_dest, Some(src), Flags::empty()).map(|_| ())
}

/**
Extended form of `copy`.

`None` for either string is invalid unless `flags` contains `IGNORE_NULLS`.
*/
pub fn copy_ex<U: Unit>(dest: Option<&mut [U]>, cch_dest: usize, src: Option<&[U]>, flags: Flags) -> Result<Tail, Error> {
    ops::compose::<Cch, U, _>(dest, cch_dest, Mode::Copy, src.map(|s| s.iter().cloned()), None, flags)
}

/**
Copies at most `cch_src` units of `src` into `dest`.

# Failure

As for `copy`.  Also fails with `InvalidParameter` if `cch_src` is above `MAX_CCH`.
*/
pub fn copy_n<U: Unit>(dest: &mut [U], cch_dest: usize, src: &[U], cch_src: usize) -> Result<(), Error> {
    copy_n_ex(Some(dest), cch_dest, Some(src), cch_src, Flags::empty()).map(|_| ())
}

pub fn copy_n_ex<U: Unit>(dest: Option<&mut [U]>, cch_dest: usize, src: Option<&[U]>, cch_src: usize, flags: Flags) -> Result<Tail, Error> {
    ops::compose::<Cch, U, _>(dest, cch_dest, Mode::Copy, src.map(|s| s.iter().cloned()), Some(cch_src), flags)
}

/**
Appends `src` to the string already in `dest`.

# Failure

Fails with `InvalidParameter` if `cch_dest` is zero, above `MAX_CCH`, or larger than `dest`, or if `dest` has no terminator within its first `cch_dest` units.

Fails with `InsufficientBuffer` if the result does not fit; `dest` then holds the original string followed by as much of `src` as fits, terminated.
*/
pub fn cat<U: Unit>(dest: &mut [U], cch_dest: usize, src: &[U]) -> Result<(), Error> {
    cat_ex(Some(dest), cch_dest, Some(src), Flags::empty()).map(|_| ())
}

pub fn cat_ex<U: Unit>(dest: Option<&mut [U]>, cch_dest: usize, src: Option<&[U]>, flags: Flags) -> Result<Tail, Error> {
    ops::compose::<Cch, U, _>(dest, cch_dest, Mode::Append, src.map(|s| s.iter().cloned()), None, flags)
}

/**
Appends at most `cch_max_append` units of `src` to the string already in `dest`.
*/
pub fn cat_n<U: Unit>(dest: &mut [U], cch_dest: usize, src: &[U], cch_max_append: usize) -> Result<(), Error> {
    cat_n_ex(Some(dest), cch_dest, Some(src), cch_max_append, Flags::empty()).map(|_| ())
}

pub fn cat_n_ex<U: Unit>(dest: Option<&mut [U]>, cch_dest: usize, src: Option<&[U]>, cch_max_append: usize, flags: Flags) -> Result<Tail, Error> {
    ops::compose::<Cch, U, _>(dest, cch_dest, Mode::Append, src.map(|s| s.iter().cloned()), Some(cch_max_append), flags)
}

/**
Reads one line from standard input into `dest`, without its `'\n'`.

Bytes are widened to units by value; no decoding takes place.

# Failure

Fails with `EndOfFile` if standard input is exhausted before anything was read.

Fails with `InsufficientBuffer` if the line does not fit; the rest of the line is discarded.
*/
pub fn gets<U: Unit>(dest: &mut [U], cch_dest: usize) -> Result<(), Error> {
    gets_ex(Some(dest), cch_dest, Flags::empty()).map(|_| ())
}

pub fn gets_ex<U: Unit>(dest: Option<&mut [U]>, cch_dest: usize, flags: Flags) -> Result<Tail, Error> {
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    gets_from_ex(&mut lock, dest, cch_dest, flags)
}

/**
Reads one line from `source` into `dest`.  See `gets`.
*/
pub fn gets_from<U, S>(source: &mut S, dest: &mut [U], cch_dest: usize) -> Result<(), Error>
where
    U: Unit,
    S: LineSource<U> + ?Sized,
{
    gets_from_ex(source, Some(dest), cch_dest, Flags::empty()).map(|_| ())
}

pub fn gets_from_ex<U, S>(source: &mut S, dest: Option<&mut [U]>, cch_dest: usize, flags: Flags) -> Result<Tail, Error>
where
    U: Unit,
    S: LineSource<U> + ?Sized,
{
    ops::gets::<Cch, U, S>(source, dest, cch_dest, flags)
}

/**
Writes formatted output into `dest`.

`format` is usually a `fmt::Arguments` (see `string_cch_printf!`), or on Unix a `c_format!`/`w_format!` call into the C library.

# Failure

Fails with `InsufficientBuffer` if the output does not fit; `dest` then holds as much of it as fits, terminated.

Fails with `InvalidParameter` if the formatter rejects its input.
*/
pub fn vprintf<U, F>(dest: &mut [U], cch_dest: usize, format: F) -> Result<(), Error>
where
    U: Unit,
    F: Formatter<U>,
{
    vprintf_ex(Some(dest), cch_dest, Flags::empty(), Some(format)).map(|_| ())
}

pub fn vprintf_ex<U, F>(dest: Option<&mut [U]>, cch_dest: usize, flags: Flags, format: Option<F>) -> Result<Tail, Error>
where
    U: Unit,
    F: Formatter<U>,
{
    ops::print::<Cch, U, F>(dest, cch_dest, format, flags)
}
