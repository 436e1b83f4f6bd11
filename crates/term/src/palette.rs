//! Tile colour policy.
//!
//! The colour of a tile depends only on its exponent, so it can be tested
//! without a terminal.

use crate::fb::Ink;

/// Colour class of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    /// Empty cells, 2 and 4
    Default,
    /// 8 through 64
    Warm,
    /// 128 and above
    Hot,
}

impl ColorClass {
    /// Classify a tile exponent.
    pub fn of(exponent: u8) -> Self {
        match exponent {
            3..=6 => ColorClass::Warm,
            7.. => ColorClass::Hot,
            _ => ColorClass::Default,
        }
    }

    pub fn ink(self) -> Ink {
        match self {
            ColorClass::Default => Ink::Default,
            ColorClass::Warm => Ink::Red,
            ColorClass::Hot => Ink::Yellow,
        }
    }
}
