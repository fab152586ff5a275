use std::{fmt::Display, str::FromStr};

/// The two pawn colors. Each color is one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Red,
    Blue,
}

impl Color {
    pub const ALL: [Self; 2] = [Color::Red, Color::Blue];

    pub fn opposite(&self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }

    /// Pawn color as RGB.
    pub const fn fill(&self) -> [u8; 3] {
        match self {
            Color::Red => [0xFF, 0x47, 0x57],
            Color::Blue => [0x37, 0x42, 0xFA],
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Color::Red),
            "blue" | "b" => Ok(Color::Blue),
            other => Err(format!("unknown color '{}', expected 'red' or 'blue'", other)),
        }
    }
}
