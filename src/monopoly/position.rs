use std::fmt::{Debug, Display};

use crate::monopoly::Error;

/// A square index on the 40 square loop. Always in `0..40`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    index: u8,
}

impl Position {
    pub const SQUARES: u8 = 40;

    pub const START: Self = Position { index: 0 };

    /// The last square before the loop closes. Reaching it wins the match.
    pub const LAST: Self = Position { index: Self::SQUARES - 1 };

    pub fn new(index: u8) -> Result<Self, Error> {
        if index < Self::SQUARES {
            Ok(Position { index })
        } else {
            Err(Error::InvalidArgument(index))
        }
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Moves `steps` squares forward, wrapping past the last square back to the start.
    pub fn advance(&self, steps: u8) -> Self {
        let index = (self.index as u16 + steps as u16) % Self::SQUARES as u16;
        Position { index: index as u8 }
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::SQUARES).map(|index| Position { index })
    }
}

impl TryFrom<u8> for Position {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Position::new(index)
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> Self {
        position.index as usize
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position({})", self.index)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        for i in 0..40 {
            assert_eq!(Position::new(i).unwrap().index(), i);
        }
        assert_eq!(Position::new(40), Err(Error::InvalidArgument(40)));
        assert_eq!(Position::try_from(255), Err(Error::InvalidArgument(255)));
    }

    #[test]
    fn test_advance_wraps() {
        let p = Position::new(37).unwrap();
        assert_eq!(p.advance(2), Position::LAST);
        assert_eq!(p.advance(3), Position::START);
        assert_eq!(p.advance(6).index(), 3);
        assert_eq!(Position::LAST.advance(255).index(), ((39u16 + 255) % 40) as u8);
    }

    #[test]
    fn test_all() {
        let all = Position::all().collect::<Vec<_>>();
        assert_eq!(all.len(), 40);
        assert_eq!(all[0], Position::START);
        assert_eq!(all[39], Position::LAST);
    }
}
