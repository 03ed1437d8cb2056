//! Cardinal headings and the fixed rotation cycle.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// The direction a car is facing.
///
/// Headings form the clockwise cycle `N → E → S → W → N`. Turning right
/// advances one position along the cycle; turning left steps back one.
///
/// # Examples
///
/// ```
/// use autodrive_core::Heading;
///
/// assert_eq!(Heading::North.right(), Heading::East);
/// assert_eq!(Heading::North.left(), Heading::West);
/// assert_eq!("S".parse::<Heading>().unwrap(), Heading::South);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// Facing `+y`.
    North = 0,
    /// Facing `+x`.
    East = 1,
    /// Facing `-y`.
    South = 2,
    /// Facing `-x`.
    West = 3,
}

impl Heading {
    /// Clockwise rotation order. `CYCLE[h as usize] == h` for every heading.
    pub const CYCLE: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Position of this heading in [`CYCLE`](Self::CYCLE).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Heading after a 90° clockwise turn.
    pub fn right(self) -> Self {
        Self::CYCLE[(self.index() + 1) % 4]
    }

    /// Heading after a 90° counter-clockwise turn.
    pub fn left(self) -> Self {
        Self::CYCLE[(self.index() + 3) % 4]
    }

    /// Returns the `(dx, dy)` of one forward move.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// Single-letter form: `N`, `E`, `S` or `W`.
    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Heading {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            other => Err(ParseError::InvalidHeading {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Heading {
    type Err = ParseError;

    /// Parses exactly one of `N`, `E`, `S`, `W`. Lower case and longer
    /// words are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::try_from(c),
            _ => Err(ParseError::InvalidHeading {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop_oneof![
            Just(Heading::North),
            Just(Heading::East),
            Just(Heading::South),
            Just(Heading::West),
        ]
    }

    #[test]
    fn cycle_matches_discriminants() {
        for (i, h) in Heading::CYCLE.iter().enumerate() {
            assert_eq!(h.index(), i);
        }
    }

    #[test]
    fn right_goes_clockwise() {
        assert_eq!(Heading::North.right(), Heading::East);
        assert_eq!(Heading::East.right(), Heading::South);
        assert_eq!(Heading::South.right(), Heading::West);
        assert_eq!(Heading::West.right(), Heading::North);
    }

    #[test]
    fn left_goes_counter_clockwise() {
        assert_eq!(Heading::North.left(), Heading::West);
        assert_eq!(Heading::West.left(), Heading::South);
        assert_eq!(Heading::South.left(), Heading::East);
        assert_eq!(Heading::East.left(), Heading::North);
    }

    #[test]
    fn offsets_are_unit_cardinal() {
        assert_eq!(Heading::North.offset(), (0, 1));
        assert_eq!(Heading::East.offset(), (1, 0));
        assert_eq!(Heading::South.offset(), (0, -1));
        assert_eq!(Heading::West.offset(), (-1, 0));
    }

    #[test]
    fn parse_accepts_exact_letters() {
        for h in Heading::CYCLE {
            assert_eq!(h.to_string().parse::<Heading>(), Ok(h));
        }
    }

    #[test]
    fn parse_rejects_other_input() {
        for bad in ["", "n", "NE", "North", "X", " N"] {
            match bad.parse::<Heading>() {
                Err(ParseError::InvalidHeading { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidHeading for {bad:?}, got {other:?}"),
            }
        }
    }

    proptest! {
        #[test]
        fn four_right_turns_are_identity(h in arb_heading()) {
            prop_assert_eq!(h.right().right().right().right(), h);
        }

        #[test]
        fn four_left_turns_are_identity(h in arb_heading()) {
            prop_assert_eq!(h.left().left().left().left(), h);
        }

        #[test]
        fn left_undoes_right(h in arb_heading()) {
            prop_assert_eq!(h.right().left(), h);
            prop_assert_eq!(h.left().right(), h);
        }
    }
}
