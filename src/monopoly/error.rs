use crate::monopoly::Phase;

/// Contract violations reported by the board and the turn engine.
/// A failed operation never changes the [`crate::monopoly::MatchState`] it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("position {0} is outside the board (0..=39)")]
    InvalidArgument(u8),

    #[error("cannot {action} while {phase}")]
    InvalidState {
        action: &'static str,
        phase: Phase,
    },
}
