/*!
Line-oriented input.
*/
use std::io::{self, BufRead};
use capacity;
use encoding::Unit;
use error::Error;

/**
A source of input, read one unit at a time.

Any `BufRead` is a line source for every unit type: each byte is widened to a unit by value.  I/O errors other than interruption end the input.
*/
pub trait LineSource<U> {
    /**
    Returns the next unit, or `None` at end of input.
    */
    fn next_unit(&mut self) -> Option<U>;
}

impl<R, U> LineSource<U> for R where R: BufRead, U: Unit {
    fn next_unit(&mut self) -> Option<U> {
        loop {
            let byte = match self.fill_buf() {
                Ok(buf) => buf.first().cloned(),
                Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    debug!("ending line input after I/O error: {}", err);
                    None
                },
            };

            return byte.map(|b| {
                self.consume(1);
                U::from_byte(b)
            });
        }
    }
}

/**
The line-read adapter.

Reads one line from `source` into the first `cch` units of `dest` and returns the index of the terminator.  The line's `'\n'` is consumed but not stored.

# Failure

Fails with `InvalidParameter`, without reading or writing anything, if `cch` is not a valid capacity for `dest`.

Fails with `EndOfFile` if input ended before any unit was read; the destination is left empty.

Fails with `InsufficientBuffer` if the line does not fit.  The destination holds the line's first `cch - 1` units, terminated, and the rest of the line is read and discarded.
*/
pub fn read_line<U, S>(source: &mut S, dest: &mut [U], cch: usize) -> Result<usize, Error>
where
    U: Unit,
    S: LineSource<U> + ?Sized,
{
    capacity::check(dest.len(), cch)?;
    let dest = &mut dest[..cch];
    let newline = U::from_byte(b'\n');
    let room = cch - 1;

    let mut len = 0;
    let mut any = false;
    loop {
        let unit = match source.next_unit() {
            Some(unit) => unit,
            None if !any => {
                dest[0] = U::zero();
                return Err(Error::EndOfFile);
            },
            None => break,
        };
        any = true;

        if unit == newline {
            break;
        }

        if len == room {
            dest[len] = U::zero();
            skip_line(source, newline);
            return Err(Error::InsufficientBuffer);
        }

        dest[len] = unit;
        len += 1;
    }

    dest[len] = U::zero();
    Ok(len)
}

fn skip_line<U, S>(source: &mut S, newline: U) where U: Unit, S: LineSource<U> + ?Sized {
    while let Some(unit) = source.next_unit() {
        if unit == newline {
            break;
        }
    }
}
