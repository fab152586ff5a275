use std::fmt::Display;

use crate::monopoly::{Color, DiceSource, Die, Error, Position};

/// Where the current turn is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingRoll,
    AwaitingEndTurn,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingRoll => write!(f, "awaiting a roll"),
            Phase::AwaitingEndTurn => write!(f, "awaiting the end of the turn"),
        }
    }
}

/// Result of [`MatchState::roll_and_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    pub player: Color,
    pub die: Die,
    pub new_position: Position,
}

/// State of one running match. Only the methods below change it, and a
/// method that returns an error leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    current_player: Color,
    positions: [Position; 2],
    phase: Phase,
    last_roll: Option<Roll>,
}

impl MatchState {
    /// Fresh match: both pawns on start, `chosen` to roll first.
    pub fn start(chosen: Color) -> Self {
        log::debug!("{:<24}{}", "match started by", chosen);
        MatchState {
            current_player: chosen,
            positions: [Position::START; 2],
            phase: Phase::AwaitingRoll,
            last_roll: None,
        }
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn position(&self, player: Color) -> Position {
        self.positions[player.index()]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The roll made this turn, cleared by [`Self::end_turn`].
    pub fn last_roll(&self) -> Option<Roll> {
        self.last_roll
    }

    /// Pawns to draw, one per color.
    pub fn pawns(&self) -> [(Color, Position); 2] {
        Color::ALL.map(|c| (c, self.position(c)))
    }

    /// Rolls one die and moves the current player forward, wrapping at the end
    /// of the loop. Passing start is not rewarded.
    pub fn roll_and_move<D: DiceSource + ?Sized>(&mut self, dice: &mut D) -> Result<Roll, Error> {
        if self.phase != Phase::AwaitingRoll {
            return Err(Error::InvalidState { action: "roll", phase: self.phase });
        }

        let die = dice.roll();
        let player = self.current_player;
        let new_position = self.position(player).advance(die.value());
        self.positions[player.index()] = new_position;
        self.phase = Phase::AwaitingEndTurn;

        let roll = Roll { player, die, new_position };
        self.last_roll = Some(roll);
        log::debug!("{:<24}{} rolled {} -> {}", "move", player, die.value(), new_position);
        Ok(roll)
    }

    /// A player standing on the last square or beyond has won. This is the
    /// simplified end condition of the game, not a full lap around the loop.
    /// The current player is checked first.
    pub fn winner(&self) -> Option<Color> {
        let current = self.current_player;
        [current, current.opposite()]
            .into_iter()
            .find(|&c| self.position(c) >= Position::LAST)
    }

    /// Hands the turn to the other player.
    pub fn end_turn(&mut self) -> Result<(), Error> {
        if self.phase != Phase::AwaitingEndTurn {
            return Err(Error::InvalidState { action: "end the turn", phase: self.phase });
        }

        self.current_player = self.current_player.opposite();
        self.phase = Phase::AwaitingRoll;
        self.last_roll = None;
        log::debug!("{:<24}{}", "turn passed to", self.current_player);
        Ok(())
    }

    /// Back to a fresh match with red to move, for use after a win or a quit.
    pub fn reset(&mut self) {
        *self = MatchState::default();
        log::info!("match reset");
    }
}

impl Default for MatchState {
    fn default() -> Self {
        MatchState {
            current_player: Color::default(),
            positions: [Position::START; 2],
            phase: Phase::AwaitingRoll,
            last_roll: None,
        }
    }
}
