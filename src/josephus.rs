use enum_map::EnumMap;

use crate::errors::*;
use crate::order::EliminationOrder;
use crate::ring::Ring;
use crate::roster::Roster;
use crate::strategy::Strategy;

/// Largest circle accepted, keeps every strategy's roster within a few hundred megabytes.
pub const MAX_PLAYERS: usize = 1 << 24;

/// Validated Josephus instance: `players` seated in a circle, every `step`-th one eliminated.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Circle {
    players: usize,
    step: u64,
}

impl Circle {
    pub fn new(players: i64, step: i64) -> Result<Circle, JosephusError> {
        if players <= 0 {
            return Err(JosephusError::InvalidPlayerCount(players));
        }
        let players = match usize::try_from(players) {
            Ok(p) if p <= MAX_PLAYERS => p,
            _ => return Err(JosephusError::TooManyPlayers(players)),
        };
        let step = match u64::try_from(step) {
            Ok(s) if s > 0 => s,
            _ => return Err(JosephusError::InvalidStepCount(step)),
        };

        Ok(Circle { players, step })
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    /// Eliminations in round order.
    pub fn eliminations(&self) -> Roster {
        Roster::new(self.players, self.step)
    }

    pub fn ring(&self) -> Ring {
        Ring::new(self.players, self.step)
    }

    /// Original 1-based position of the last survivor.
    pub fn winner(&self) -> usize {
        self.winner_with(Strategy::Roster)
    }

    pub fn winner_with(&self, strategy: Strategy) -> usize {
        let winner = match strategy {
            Strategy::Roster => {
                let mut roster = self.eliminations();
                roster.by_ref().for_each(drop);
                roster.survivor().expect("roster exhausted without a survivor")
            }
            Strategy::Ring => {
                let mut ring = self.ring();
                ring.by_ref().for_each(drop);
                ring.survivor().expect("ring exhausted without a survivor")
            }
            Strategy::Recurrence => self.recurrence(),
        };
        log::debug!("n={} k={} strategy={strategy}: winner {winner}", self.players, self.step);
        winner
    }

    fn recurrence(&self) -> usize {
        (2..=self.players).fold(0, |j, m| (j + (self.step % m as u64) as usize) % m) + 1
    }

    pub fn winners(&self) -> EnumMap<Strategy, usize> {
        EnumMap::from_fn(|strategy| self.winner_with(strategy))
    }

    /// Winner agreed on by every strategy.
    pub fn verify(&self) -> Result<usize, JosephusError> {
        let winners = self.winners();
        let winner = winners[Strategy::Roster];
        if winners.values().all(|&w| w == winner) {
            Ok(winner)
        } else {
            log::error!("n={} k={}: strategies disagree", self.players, self.step);
            Err(JosephusError::StrategyMismatch(winners))
        }
    }

    pub fn elimination_order(&self) -> EliminationOrder {
        EliminationOrder::record(self.eliminations())
    }
}

/// Winner of the circle of `players` eliminating every `step`-th one.
pub fn winner(players: i64, step: i64) -> Result<usize, JosephusError> {
    Ok(Circle::new(players, step)?.winner())
}
