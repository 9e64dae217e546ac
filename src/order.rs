use std::fmt::{Display, Formatter};

use bimap::BiMap;

use crate::roster::Roster;

/// Complete record of a simulation: who left in which round, and who stayed.
///
/// Rounds are numbered from 1.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EliminationOrder {
    rounds: BiMap<usize, usize>,
    survivor: usize,
}

impl EliminationOrder {
    pub(crate) fn record(mut roster: Roster) -> EliminationOrder {
        let mut rounds = BiMap::with_capacity(roster.len());
        for (round, player) in roster.by_ref().enumerate() {
            rounds.insert_no_overwrite(player, round + 1).expect("player eliminated twice");
        }
        let survivor = roster.survivor().expect("roster exhausted without a survivor");
        EliminationOrder { rounds, survivor }
    }

    /// Round in which `player` was eliminated, `None` for the survivor and unknown players.
    pub fn round_of(&self, player: usize) -> Option<usize> {
        self.rounds.get_by_left(&player).copied()
    }

    /// Player eliminated in `round`.
    pub fn player_at(&self, round: usize) -> Option<usize> {
        self.rounds.get_by_right(&round).copied()
    }

    /// Number of eliminations, always one less than the number of players.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn survivor(&self) -> usize {
        self.survivor
    }

    /// Eliminated players in round order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=self.rounds.len()).map(|round| *self.rounds.get_by_right(&round).expect("broken rounds map"))
    }
}

impl Display for EliminationOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for player in self.iter() {
            write!(f, "{player} ")?;
        }
        write!(f, "-> {}", self.survivor)
    }
}
