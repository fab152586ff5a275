use std::{fmt::Debug, num::NonZeroU8};

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// The face of a single six sided die. Always in `1..=6`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    data: NonZeroU8,
}

impl Die {
    pub const ALL: [Self; 6] = [
        Die::from_number(1), Die::from_number(2), Die::from_number(3),
        Die::from_number(4), Die::from_number(5), Die::from_number(6),
    ];

    /// Only for constants. Use [`Die::new`] for values that are not known to be valid.
    const fn from_number(value: u8) -> Self {
        Die { data: NonZeroU8::new(value).unwrap() }
    }

    pub fn new(value: u8) -> Option<Self> {
        match value {
            1..=6 => Some(Die::from_number(value)),
            _ => None,
        }
    }

    pub fn value(&self) -> u8 {
        self.data.get()
    }
}

impl Debug for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Die({})", self.value())
    }
}

/// Where the turn engine gets its rolls from.
pub trait DiceSource {
    fn roll(&mut self) -> Die;
}

/// Uniform rolls from any [`Rng`].
pub struct RandomDice<R: Rng = SmallRng> {
    rng: R,
}

impl RandomDice<SmallRng> {
    /// Reproducible rolls: the same seed always yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        RandomDice { rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        RandomDice { rng: SmallRng::from_rng(&mut rand::rng()) }
    }
}

impl<R: Rng> RandomDice<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomDice { rng }
    }
}

impl<R: Rng> DiceSource for RandomDice<R> {
    fn roll(&mut self) -> Die {
        Die::ALL[self.rng.random_range(0..Die::ALL.len())]
    }
}

/// Replays a fixed list of rolls, starting over once the list is used up.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<Die>,
    next: usize,
}

impl ScriptedDice {
    /// Panics if `rolls` is empty.
    pub fn new(rolls: impl IntoIterator<Item = Die>) -> Self {
        let rolls = rolls.into_iter().collect::<Vec<_>>();
        assert!(!rolls.is_empty(), "ScriptedDice needs at least one roll");
        ScriptedDice { rolls, next: 0 }
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> Die {
        let die = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        die
    }
}
