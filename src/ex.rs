/*!
The extended-flag processor.

Wraps a core operation (copy, append, format or line read) with the behaviours selected by `Flags`.  Precedence is fixed: null handling, then the core operation, then `FILL_BEHIND_NULL` on success, or `NO_TRUNCATION`, `FILL_ON_FAILURE` and `NULL_ON_FAILURE`, in that order, on failure.
*/
use capacity::{self, Capacity};
use encoding::Unit;
use error::Error;
use flags::Flags;

/**
Where a successful operation left the destination.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tail {
    /**
    Index of the terminator, in code units.
    */
    pub end: usize,

    /**
    Capacity not used by content, counting the terminator's slot.  This is in the caller's capacity convention: units for `cch` operations, bytes for `cb` ones.
    */
    pub remaining: usize,
}

/**
Runs `core` against `dest` and applies `flags` to the outcome.

`cch` is the normalised destination capacity.  `core` receives the destination and returns the index of the terminator it wrote.
*/
pub fn run<C, U, F>(dest: Option<&mut [U]>, cch: usize, flags: Flags, core: F) -> Result<Tail, Error>
where
    C: Capacity,
    U: Unit,
    F: FnOnce(&mut [U]) -> Result<usize, Error>,
{
    let dest = match dest {
        Some(dest) => dest,
        None => {
            return if cch == 0 && flags.contains(Flags::IGNORE_NULLS) {
                Ok(Tail { end: 0, remaining: 0 })
            } else {
                Err(Error::InvalidParameter)
            };
        },
    };

    match core(&mut *dest) {
        Ok(end) => {
            if flags.contains(Flags::FILL_BEHIND_NULL) {
                fill(&mut dest[end + 1..cch], flags.fill_byte());
            }
            Ok(Tail {
                end: end,
                remaining: C::from_cch::<U>(cch - end),
            })
        },
        Err(err) => {
            on_failure::<C, U>(dest, cch, flags, err);
            Err(err)
        },
    }
}

fn on_failure<C, U>(dest: &mut [U], cch: usize, flags: Flags, err: Error) where C: Capacity, U: Unit {
    // An unusable capacity never licenses a write.
    if capacity::check(dest.len(), cch).is_err() {
        return;
    }
    let dest = &mut dest[..cch];

    if err == Error::InsufficientBuffer && flags.contains(Flags::NO_TRUNCATION) {
        trace!("{}: discarding truncated result ({} units)", C::debug_prefix(), cch);
        dest[0] = U::zero();
    }

    if flags.contains(Flags::FILL_ON_FAILURE) {
        trace!("{}: filling {} units with {:#04x} after {:?}", C::debug_prefix(), cch, flags.fill_byte(), err);
        fill(dest, flags.fill_byte());
        dest[0] = U::zero();
    }

    if flags.contains(Flags::NULL_ON_FAILURE) {
        trace!("{}: emptying destination after {:?}", C::debug_prefix(), err);
        dest[0] = U::zero();
    }
}

fn fill<U: Unit>(units: &mut [U], b: u8) {
    let unit = U::splat(b);
    for u in units {
        *u = unit;
    }
}
