/*!
Flags accepted by the extended (`_ex`) operations.
*/
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/**
A set of extended-operation flags.

The low byte carries the fill byte used by `FILL_BEHIND_NULL` and `FILL_ON_FAILURE`.  Bits with no assigned meaning are kept but ignored.
*/
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// Treat a missing source as empty, and allow a missing destination when its capacity is zero.
    pub const IGNORE_NULLS: Flags = Flags(0x00000100);
    /// On success, fill every unit after the terminator with the fill byte.
    pub const FILL_BEHIND_NULL: Flags = Flags(0x00000200);
    /// On failure, fill the whole destination with the fill byte, then empty it.
    pub const FILL_ON_FAILURE: Flags = Flags(0x00000400);
    /// On failure, empty the destination.
    pub const NULL_ON_FAILURE: Flags = Flags(0x00000800);
    /// On truncation, empty the destination instead of leaving a truncated prefix.
    pub const NO_TRUNCATION: Flags = Flags(0x00001000);

    const FILL_MASK: u32 = 0x000000ff;

    /**
    The empty flag set.
    */
    #[inline]
    pub fn empty() -> Flags {
        Flags(0)
    }

    /**
    Constructs a flag set from its wire representation.  Unknown bits are preserved.
    */
    #[inline]
    pub fn from_bits(bits: u32) -> Flags {
        Flags(bits)
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /**
    Returns this flag set with the fill byte replaced by `b`.
    */
    #[inline]
    pub fn fill(self, b: u8) -> Flags {
        Flags((self.0 & !Flags::FILL_MASK) | b as u32)
    }

    #[inline]
    pub fn fill_byte(self) -> u8 {
        (self.0 & Flags::FILL_MASK) as u8
    }

    /**
    Returns `true` if every flag in `other` is also set in `self`.
    */
    #[inline]
    pub fn contains(self, other: Flags) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        const NAMES: &'static [(Flags, &'static str)] = &[
            (Flags::IGNORE_NULLS, "IGNORE_NULLS"),
            (Flags::FILL_BEHIND_NULL, "FILL_BEHIND_NULL"),
            (Flags::FILL_ON_FAILURE, "FILL_ON_FAILURE"),
            (Flags::NULL_ON_FAILURE, "NULL_ON_FAILURE"),
            (Flags::NO_TRUNCATION, "NO_TRUNCATION"),
        ];

        write!(fmt, "Flags(")?;
        let mut first = true;
        for &(flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(fmt, " | ")?;
                }
                write!(fmt, "{}", name)?;
                first = false;
            }
        }
        if self.fill_byte() != 0 {
            if !first {
                write!(fmt, " | ")?;
            }
            write!(fmt, "fill={:#04x}", self.fill_byte())?;
        }
        write!(fmt, ")")
    }
}
