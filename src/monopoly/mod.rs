mod error;
pub use error::Error;

mod position;
pub use position::Position;

mod names;
pub use names::{Locale, name_of, short_label};

mod square;
pub use square::{Square, SquareType, classify};

mod board;
pub use board::{Board, GRID, Point, square_geometry};

mod player;
pub use player::Color;

mod dice;
pub use dice::{DiceSource, Die, RandomDice, ScriptedDice};

mod game;
pub use game::{MatchState, Phase, Roll};
