use std::fmt::Display;

use hashbrown::HashMap;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::monopoly::{Color, DiceSource, Error, MatchState, Position, RandomDice};

/// Settings for a batch of headless matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub matches: usize,
    /// Match `k` rolls with dice seeded by `seed + k`.
    pub seed: u64,
    /// Rolls after which a match without a winner is given up.
    pub max_turns: u32,
    pub first: Color,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            matches: 1000,
            seed: 0,
            max_turns: 1000,
            first: Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: Option<Color>,
    pub rolls: u32,
}

/// Plays one match to the end: roll, check for a winner, end the turn.
/// Every square a pawn lands on is counted in `landings`.
pub fn play_match<D: DiceSource + ?Sized>(
    first: Color,
    dice: &mut D,
    max_turns: u32,
    landings: &mut HashMap<Position, u64>,
) -> Result<MatchOutcome, Error> {
    let mut state = MatchState::start(first);
    for rolls in 1..=max_turns {
        let roll = state.roll_and_move(dice)?;
        *landings.entry(roll.new_position).or_insert(0) += 1;

        if let Some(winner) = state.winner() {
            return Ok(MatchOutcome { winner: Some(winner), rolls });
        }
        state.end_turn()?;
    }
    Ok(MatchOutcome { winner: None, rolls: max_turns })
}

/// Totals over a batch of matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub matches: u64,
    wins: [u64; 2],
    pub unfinished: u64,
    /// Rolls spent in matches that produced a winner.
    pub finished_rolls: u64,
    pub rolls: u64,
    pub landings: HashMap<Position, u64>,
}

impl Report {
    fn single(outcome: MatchOutcome, landings: HashMap<Position, u64>) -> Self {
        let mut report = Report {
            matches: 1,
            rolls: outcome.rolls as u64,
            landings,
            ..Default::default()
        };
        match outcome.winner {
            Some(winner) => {
                report.wins[winner.index()] = 1;
                report.finished_rolls = outcome.rolls as u64;
            }
            None => report.unfinished = 1,
        }
        report
    }

    pub fn wins(&self, color: Color) -> u64 {
        self.wins[color.index()]
    }

    pub fn finished(&self) -> u64 {
        self.wins.iter().sum()
    }

    pub fn mean_rolls(&self) -> Option<f64> {
        match self.finished() {
            0 => None,
            n => Some(self.finished_rolls as f64 / n as f64),
        }
    }

    pub fn merge(mut self, other: Report) -> Report {
        self.matches += other.matches;
        self.wins[0] += other.wins[0];
        self.wins[1] += other.wins[1];
        self.unfinished += other.unfinished;
        self.finished_rolls += other.finished_rolls;
        self.rolls += other.rolls;
        for (position, count) in other.landings {
            *self.landings.entry(position).or_insert(0) += count;
        }
        self
    }

    /// The `n` squares landed on most often, ties broken by board order.
    pub fn most_landed(&self, n: usize) -> Vec<(Position, u64)> {
        let mut squares = self.landings.iter().map(|(&p, &c)| (p, c)).collect::<Vec<_>>();
        squares.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        squares.truncate(n);
        squares
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rate = |count: u64| match self.matches {
            0 => 0.0,
            n => count as f64 / n as f64 * 100.0,
        };
        writeln!(f, "Matches: {}, Rolls: {}", self.matches, self.rolls)?;
        for color in Color::ALL {
            writeln!(f, "{:<5} wins: {} ({:.2}%)", color, self.wins(color), rate(self.wins(color)))?;
        }
        writeln!(f, "Unfinished: {} ({:.2}%)", self.unfinished, rate(self.unfinished))?;
        match self.mean_rolls() {
            Some(mean) => writeln!(f, "Mean rolls to win: {:.2}", mean)?,
            None => writeln!(f, "Mean rolls to win: -")?,
        }
        write!(f, "Most landed:")?;
        for (position, count) in self.most_landed(5) {
            write!(f, " {}x{}", position, count)?;
        }
        Ok(())
    }
}

/// Runs `config.matches` independent matches on the rayon pool. Each match owns
/// its own state and dice, so the report only depends on the config.
pub fn simulate(config: SimulationConfig) -> Result<Report, Error> {
    log::info!("{:<24}{}", "simulating matches", config.matches);
    let report = (0..config.matches)
        .into_par_iter()
        .map(|k| -> Result<Report, Error> {
            let mut dice = RandomDice::seeded(config.seed.wrapping_add(k as u64));
            let mut landings = HashMap::new();
            let outcome = play_match(config.first, &mut dice, config.max_turns, &mut landings)?;
            Ok(Report::single(outcome, landings))
        })
        .try_reduce(Report::default, |a, b| Ok(a.merge(b)))?;
    log::info!("{:<24}{}", "finished matches", report.finished());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monopoly::{Die, ScriptedDice};

    #[test]
    fn test_play_match_scripted() {
        // First player rolls 6, second 1. First reaches 36 after six rolls and then 39 with a 3.
        let mut dice = ScriptedDice::new([6, 1, 6, 1, 6, 1, 6, 1, 6, 1, 6, 1, 3].map(|v| Die::new(v).unwrap()));
        let mut landings = HashMap::new();
        let outcome = play_match(Color::Blue, &mut dice, 100, &mut landings).unwrap();

        assert_eq!(outcome, MatchOutcome { winner: Some(Color::Blue), rolls: 13 });
        assert_eq!(landings.values().sum::<u64>(), 13);
        assert_eq!(landings[&Position::LAST], 1);
        assert_eq!(landings[&Position::new(6).unwrap()], 2);
    }

    #[test]
    fn test_play_match_gives_up() {
        // Only ever rolling 4 visits the multiples of 4 and never reaches 39.
        let mut dice = ScriptedDice::new([Die::new(4).unwrap()]);
        let mut landings = HashMap::new();
        let outcome = play_match(Color::Red, &mut dice, 50, &mut landings).unwrap();

        assert_eq!(outcome, MatchOutcome { winner: None, rolls: 50 });
        assert!(landings.keys().all(|p| p.index() % 4 == 0));
    }

    #[test]
    fn test_simulate_totals() {
        let config = SimulationConfig { matches: 200, seed: 11, max_turns: 500, first: Color::Red };
        let report = simulate(config).unwrap();

        assert_eq!(report.matches, 200);
        assert_eq!(report.finished() + report.unfinished, 200);
        assert_eq!(report.landings.values().sum::<u64>(), report.rolls);
        assert!(report.finished_rolls <= report.rolls);
    }

    #[test]
    fn test_simulate_is_deterministic() {
        let config = SimulationConfig { matches: 64, seed: 5, max_turns: 300, first: Color::Blue };
        assert_eq!(simulate(config).unwrap(), simulate(config).unwrap());
    }

    #[test]
    fn test_merge_and_most_landed() {
        let p = |i| Position::new(i).unwrap();
        let a = Report::single(MatchOutcome { winner: Some(Color::Red), rolls: 3 }, [(p(3), 2), (p(7), 1)].into_iter().collect());
        let b = Report::single(MatchOutcome { winner: None, rolls: 2 }, [(p(7), 1), (p(1), 1)].into_iter().collect());
        let report = a.merge(b);

        assert_eq!(report.matches, 2);
        assert_eq!(report.wins(Color::Red), 1);
        assert_eq!(report.wins(Color::Blue), 0);
        assert_eq!(report.unfinished, 1);
        assert_eq!(report.rolls, 5);
        assert_eq!(report.mean_rolls(), Some(3.0));
        assert_eq!(report.most_landed(2), vec![(p(3), 2), (p(7), 2)]);
    }
}
