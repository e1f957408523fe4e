/*!
The copy/append state machine.

Every copying operation in the crate funnels through `compose`.  It accounts capacity in code units, always reserves one slot for the terminator, and distinguishes a source that was fully consumed from one that was cut short.
*/
use std::cmp;
use capacity;
use encoding::Unit;
use error::Error;
use view;

/**
Where writing starts.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Overwrite the destination from its first unit.
    Copy,
    /// Write after the destination's existing content.  The destination must be terminated within its capacity.
    Append,
}

/**
Copies units from `src` into `dest`, returning the index of the terminator written.

Copying stops at the first zero unit in `src`, after `max` units (if given), or when the destination is full, whichever comes first.  The destination is terminated in all three cases.

# Failure

Fails with `InvalidParameter`, without writing anything, if `cch` is not a valid capacity for `dest`, or if appending to a destination with no terminator in its first `cch` units.

Fails with `InsufficientBuffer` if the destination filled up while `src` still had units to give (within `max`).  The destination then holds a terminated prefix of the full result, ending at `cch - 1`.
*/
pub fn compose<U, I>(dest: &mut [U], cch: usize, mode: Mode, src: I, max: Option<usize>) -> Result<usize, Error>
where
    U: Unit,
    I: IntoIterator<Item=U>,
{
    capacity::check(dest.len(), cch)?;
    let dest = &mut dest[..cch];

    let start = match mode {
        Mode::Copy => 0,
        Mode::Append => view::terminator(dest).ok_or(Error::InvalidParameter)?,
    };

    // One slot always stays free for the terminator.
    let room = cch - start - 1;
    let limit = max.map_or(room, |max| cmp::min(max, room));

    let mut src = src.into_iter().take_while(|u| !u.is_zero());
    let mut copied = 0;
    while copied < limit {
        match src.next() {
            Some(unit) => {
                dest[start + copied] = unit;
                copied += 1;
            },
            None => break,
        }
    }

    let end = start + copied;
    dest[end] = U::zero();

    // `max` is checked first so a bounded source is never read past its bound.
    let truncated = copied == room
        && max.map_or(true, |max| max > copied)
        && src.next().is_some();

    if truncated {
        Err(Error::InsufficientBuffer)
    } else {
        Ok(end)
    }
}
