//! Actions and their text encoding.
//!
//! An action names a source pit, whether the reserve seeds are lifted, and a
//! color. On the wire it is a 1-indexed pit number followed by a suffix:
//!
//! | Token  | Meaning                    |
//! |--------|----------------------------|
//! | `3R`   | sow the red seeds of pit 3 |
//! | `12B`  | sow the blue seeds of pit 12 |
//! | `7TR`  | sow the reserve of pit 7 as red, then its red seeds |
//! | `16TB` | sow the reserve of pit 16 as blue, then its blue seeds |
//!
//! Decoding is case insensitive.

use std::fmt;
use std::str::FromStr;

use crate::board::{Color, Seed};
use crate::constants::NUM_PITS;

/// Why a token or position line could not be decoded.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty input")]
    Empty,
    #[error("missing pit number in {0:?}")]
    MissingPit(String),
    #[error("pit {0} is outside 1..=16")]
    PitOutOfRange(u64),
    #[error("unknown move suffix {0:?}")]
    UnknownSuffix(String),
    #[error("not a STATE line")]
    NotState,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid value {value:?} for `{field}`")]
    InvalidField { field: &'static str, value: String },
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),
    #[error("expected 16 pit groups, parsed {0}")]
    MissingPits(usize),
    #[error("position holds {0} seeds, more than the 96 in play")]
    TooManySeeds(u64),
    #[error("ply {0} is past the end of the game")]
    PlyOutOfRange(u32),
}

/// A single move: which pit to lift from and what to sow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    /// Source pit, 0-indexed.
    pub pit: usize,
    /// Lift the reserve seeds first, sowing them under `color`'s rule.
    pub use_reserve: bool,
    pub color: Color,
}

impl Action {
    pub const fn new(pit: usize, color: Color) -> Self {
        Self {
            pit,
            use_reserve: false,
            color,
        }
    }

    pub const fn reserve(pit: usize, color: Color) -> Self {
        Self {
            pit,
            use_reserve: true,
            color,
        }
    }

    /// The seed kind lifted first by this action.
    #[inline]
    pub fn lifted_seed(&self) -> Seed {
        if self.use_reserve {
            Seed::Reserve
        } else {
            Seed::from(self.color)
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.use_reserve { "T" } else { "" };
        let color = match self.color {
            Color::Red => 'R',
            Color::Blue => 'B',
        };
        write!(f, "{}{prefix}{color}", self.pit + 1)
    }
}

impl FromStr for Action {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DecodeError::Empty);
        }

        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Err(DecodeError::MissingPit(s.to_string()));
        }

        // Overlong numbers saturate and land in the range check below.
        let number = s[..digits].parse::<u64>().unwrap_or(u64::MAX);
        if !(1..=NUM_PITS as u64).contains(&number) {
            return Err(DecodeError::PitOutOfRange(number));
        }
        let pit = number as usize - 1;

        let suffix = s[digits..].to_ascii_uppercase();
        match suffix.as_str() {
            "R" => Ok(Action::new(pit, Color::Red)),
            "B" => Ok(Action::new(pit, Color::Blue)),
            "TR" => Ok(Action::reserve(pit, Color::Red)),
            "TB" => Ok(Action::reserve(pit, Color::Blue)),
            _ => Err(DecodeError::UnknownSuffix(s[digits..].to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("3R".parse::<Action>(), Ok(Action::new(2, Color::Red)));
        assert_eq!("12b".parse::<Action>(), Ok(Action::new(11, Color::Blue)));
        assert_eq!("7TR".parse::<Action>(), Ok(Action::reserve(6, Color::Red)));
        assert_eq!("16tb".parse::<Action>(), Ok(Action::reserve(15, Color::Blue)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Action>(), Err(DecodeError::Empty));
        assert!(matches!("R3".parse::<Action>(), Err(DecodeError::MissingPit(_))));
        assert_eq!("0R".parse::<Action>(), Err(DecodeError::PitOutOfRange(0)));
        assert_eq!("17B".parse::<Action>(), Err(DecodeError::PitOutOfRange(17)));
        assert!(matches!("4X".parse::<Action>(), Err(DecodeError::UnknownSuffix(_))));
        assert!(matches!("4".parse::<Action>(), Err(DecodeError::UnknownSuffix(_))));
        assert!(matches!("4RT".parse::<Action>(), Err(DecodeError::UnknownSuffix(_))));
    }

    #[test]
    fn test_display_matches_wire_format() {
        assert_eq!(Action::new(0, Color::Red).to_string(), "1R");
        assert_eq!(Action::new(9, Color::Blue).to_string(), "10B");
        assert_eq!(Action::reserve(6, Color::Red).to_string(), "7TR");
        assert_eq!(Action::reserve(15, Color::Blue).to_string(), "16TB");
    }

    #[test]
    fn test_lifted_seed() {
        assert_eq!(Action::new(0, Color::Blue).lifted_seed(), Seed::Blue);
        assert_eq!(Action::reserve(0, Color::Blue).lifted_seed(), Seed::Reserve);
    }
}
