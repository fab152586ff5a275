use std::fmt::Display;

use crate::monopoly::{Error, Locale, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareType {
    Start,
    Jail,
    FreeParking,
    GoToJail,
    Railroad,
    Utility,
    Property,
}

impl SquareType {
    pub const ALL: [Self; 7] = [
        SquareType::Start, SquareType::Jail, SquareType::FreeParking, SquareType::GoToJail,
        SquareType::Railroad, SquareType::Utility, SquareType::Property,
    ];

    /// Classifies a square by its index. The four corners are matched before the
    /// divisibility rules, otherwise 10, 20 and 30 would come out as railroads.
    pub const fn of(position: Position) -> Self {
        match position.index() {
            0 => SquareType::Start,
            20 => SquareType::FreeParking,
            30 => SquareType::GoToJail,
            10 => SquareType::Jail,
            i if i % 5 == 0 => SquareType::Railroad,
            i if i % 3 == 0 => SquareType::Utility,
            _ => SquareType::Property,
        }
    }

    /// Fill color of the cell as RGB.
    pub const fn fill(&self) -> [u8; 3] {
        match self {
            SquareType::Start => [0x90, 0xEE, 0x90],
            SquareType::Jail => [0xFF, 0xB6, 0xC1],
            SquareType::FreeParking => [0x87, 0xCE, 0xEB],
            SquareType::GoToJail => [0xFF, 0xA5, 0x00],
            SquareType::Railroad => [0xDD, 0xA0, 0xDD],
            SquareType::Utility => [0xF0, 0xE6, 0x8C],
            SquareType::Property => [0xFF, 0xFF, 0xFF],
        }
    }

    pub const fn is_corner(&self) -> bool {
        matches!(self, SquareType::Start | SquareType::Jail | SquareType::FreeParking | SquareType::GoToJail)
    }
}

impl Display for SquareType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SquareType::Start => "start",
            SquareType::Jail => "jail",
            SquareType::FreeParking => "free-parking",
            SquareType::GoToJail => "go-to-jail",
            SquareType::Railroad => "railroad",
            SquareType::Utility => "utility",
            SquareType::Property => "property",
        };
        write!(f, "{}", s)
    }
}

/// Classifies a raw board index. Fails for anything past the last square.
pub fn classify(index: u8) -> Result<SquareType, Error> {
    Position::new(index).map(SquareType::of)
}

/// One cell of the board. Built once by [`crate::monopoly::Board::new`] and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    position: Position,
    kind: SquareType,
    name: String,
}

impl Square {
    pub fn new(position: Position, locale: Locale) -> Self {
        Square {
            position,
            kind: SquareType::of(position),
            name: locale.name_of(position.index() as usize),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> SquareType {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_scenarios() {
        assert_eq!(classify(0), Ok(SquareType::Start));
        assert_eq!(classify(20), Ok(SquareType::FreeParking));
        assert_eq!(classify(30), Ok(SquareType::GoToJail));
        assert_eq!(classify(10), Ok(SquareType::Jail));
        assert_eq!(classify(25), Ok(SquareType::Railroad));
        assert_eq!(classify(12), Ok(SquareType::Utility));
        assert_eq!(classify(1), Ok(SquareType::Property));
    }

    #[test]
    fn test_corners_take_precedence() {
        // 0 and 30 are multiples of both 5 and 3, 10 and 20 of 5.
        let corners = [(0, SquareType::Start), (10, SquareType::Jail), (20, SquareType::FreeParking), (30, SquareType::GoToJail)];
        for (i, expected) in corners {
            assert_eq!(classify(i).unwrap(), expected);
            assert!(expected.is_corner());
        }
    }

    #[test]
    fn test_classify_whole_board() {
        let mut counts = [0; 7];
        for i in 0..40 {
            let kind = classify(i).unwrap();
            let slot = SquareType::ALL.iter().position(|&k| k == kind).unwrap();
            counts[slot] += 1;

            if ![0, 10, 20, 30].contains(&i) {
                assert!(!kind.is_corner());
                if i % 5 == 0 {
                    assert_eq!(kind, SquareType::Railroad);
                } else if i % 3 == 0 {
                    assert_eq!(kind, SquareType::Utility);
                } else {
                    assert_eq!(kind, SquareType::Property);
                }
            }
        }
        // 5, 15, 25, 35 are the railroads.
        assert_eq!(counts, [1, 1, 1, 1, 4, 11, 21]);
    }

    #[test]
    fn test_classify_out_of_range() {
        assert_eq!(classify(40), Err(Error::InvalidArgument(40)));
        assert_eq!(classify(u8::MAX), Err(Error::InvalidArgument(u8::MAX)));
    }

    #[test]
    fn test_square() {
        let square = Square::new(Position::new(5).unwrap(), Locale::English);
        assert_eq!(square.kind(), SquareType::Railroad);
        assert_eq!(square.name(), "Reading Railroad");
        assert_eq!(square.position().index(), 5);
    }
}
