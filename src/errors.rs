use enum_map::EnumMap;
use thiserror::Error;

use crate::strategy::Strategy;

/// Josephus circle failure
#[derive(Error, Debug, Eq, PartialEq, Clone)]
pub enum JosephusError {
    /// Player count is not positive.
    #[error("invalid number of players: {0} (must be at least 1)")]
    InvalidPlayerCount(i64),
    /// Player count above `MAX_PLAYERS`, so the roster can't be allocated.
    #[error("too many players: {0} (at most {max})", max = crate::josephus::MAX_PLAYERS)]
    TooManyPlayers(i64),
    /// Step count is not positive.
    #[error("invalid step count: {0} (must be at least 1)")]
    InvalidStepCount(i64),
    /// Strategy name not recognized.
    #[error("unknown strategy `{0}` (expected roster, ring or recurrence)")]
    UnknownStrategy(String),
    /// Strategies disagree on the winner.
    #[error("strategies disagree: {}", format_winners(.0))]
    StrategyMismatch(EnumMap<Strategy, usize>),
}

fn format_winners(winners: &EnumMap<Strategy, usize>) -> String {
    winners.iter().map(|(s, w)| format!("{s}={w}")).collect::<Vec<_>>().join(", ")
}
