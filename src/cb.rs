/*!
Operations with capacities counted in bytes.

Byte capacities are rounded down to whole code units on entry, so a trailing partial unit is never written.  `remaining` counts are reported back in bytes.  The byte ceiling is `MAX_CCH` times the size of a unit.

Apart from the unit of measure, these behave exactly like the operations in `cch`.
*/
use std::io;
use capacity::Cb;
use encoding::Unit;
use engine::Mode;
use error::Error;
use ex::Tail;
use flags::Flags;
use format::Formatter;
use line::LineSource;
use ops;

/**
Returns the length of `psz` in bytes, excluding the terminator, scanning at most `cb_max` bytes.
*/
pub fn length<U: Unit>(psz: &[U], cb_max: usize) -> Result<usize, Error> {
    ops::length::<Cb, U>(psz, cb_max)
}

/**
Copies `src` into the first `cb_dest` bytes of `dest`.  See `cch::copy`.
*/
pub fn copy<U: Unit>(dest: &mut [U], cb_dest: usize, src: &[U]) -> Result<(), Error> {
    copy_ex(Some(dest), cb_dest, Some(src), Flags::empty()).map(|_| ())
}

pub fn copy_ex<U: Unit>(dest: Option<&mut [U]>, cb_dest: usize, src: Option<&[U]>, flags: Flags) -> Result<Tail, Error> {
    ops::compose::<Cb, U, _>(dest, cb_dest, Mode::Copy, src.map(|s| s.iter().cloned()), None, flags)
}

/**
Copies at most `cb_src` bytes' worth of units from `src`.
*/
pub fn copy_n<U: Unit>(dest: &mut [U], cb_dest: usize, src: &[U], cb_src: usize) -> Result<(), Error> {
    copy_n_ex(Some(dest), cb_dest, Some(src), cb_src, Flags::empty()).map(|_| ())
}

pub fn copy_n_ex<U: Unit>(dest: Option<&mut [U]>, cb_dest: usize, src: Option<&[U]>, cb_src: usize, flags: Flags) -> Result<Tail, Error> {
    ops::compose::<Cb, U, _>(dest, cb_dest, Mode::Copy, src.map(|s| s.iter().cloned()), Some(cb_src), flags)
}

/**
Appends `src` to the string in the first `cb_dest` bytes of `dest`.  See `cch::cat`.
*/
pub fn cat<U: Unit>(dest: &mut [U], cb_dest: usize, src: &[U]) -> Result<(), Error> {
    cat_ex(Some(dest), cb_dest, Some(src), Flags::empty()).map(|_| ())
}

pub fn cat_ex<U: Unit>(dest: Option<&mut [U]>, cb_dest: usize, src: Option<&[U]>, flags: Flags) -> Result<Tail, Error> {
    ops::compose::<Cb, U, _>(dest, cb_dest, Mode::Append, src.map(|s| s.iter().cloned()), None, flags)
}

pub fn cat_n<U: Unit>(dest: &mut [U], cb_dest: usize, src: &[U], cb_max_append: usize) -> Result<(), Error> {
    cat_n_ex(Some(dest), cb_dest, Some(src), cb_max_append, Flags::empty()).map(|_| ())
}

pub fn cat_n_ex<U: Unit>(dest: Option<&mut [U]>, cb_dest: usize, src: Option<&[U]>, cb_max_append: usize, flags: Flags) -> Result<Tail, Error> {
    ops::compose::<Cb, U, _>(dest, cb_dest, Mode::Append, src.map(|s| s.iter().cloned()), Some(cb_max_append), flags)
}

/**
Reads one line from standard input.  See `cch::gets`.
*/
pub fn gets<U: Unit>(dest: &mut [U], cb_dest: usize) -> Result<(), Error> {
    gets_ex(Some(dest), cb_dest, Flags::empty()).map(|_| ())
}

pub fn gets_ex<U: Unit>(dest: Option<&mut [U]>, cb_dest: usize, flags: Flags) -> Result<Tail, Error> {
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    gets_from_ex(&mut lock, dest, cb_dest, flags)
}

pub fn gets_from<U, S>(source: &mut S, dest: &mut [U], cb_dest: usize) -> Result<(), Error>
where
    U: Unit,
    S: LineSource<U> + ?Sized,
{
    gets_from_ex(source, Some(dest), cb_dest, Flags::empty()).map(|_| ())
}

pub fn gets_from_ex<U, S>(source: &mut S, dest: Option<&mut [U]>, cb_dest: usize, flags: Flags) -> Result<Tail, Error>
where
    U: Unit,
    S: LineSource<U> + ?Sized,
{
    ops::gets::<Cb, U, S>(source, dest, cb_dest, flags)
}

/**
Writes formatted output into the first `cb_dest` bytes of `dest`.  See `cch::vprintf`.
*/
pub fn vprintf<U, F>(dest: &mut [U], cb_dest: usize, format: F) -> Result<(), Error>
where
    U: Unit,
    F: Formatter<U>,
{
    vprintf_ex(Some(dest), cb_dest, Flags::empty(), Some(format)).map(|_| ())
}

pub fn vprintf_ex<U, F>(dest: Option<&mut [U]>, cb_dest: usize, flags: Flags, format: Option<F>) -> Result<Tail, Error>
where
    U: Unit,
    F: Formatter<U>,
{
    ops::print::<Cb, U, F>(dest, cb_dest, format, flags)
}
