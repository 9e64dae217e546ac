use std::fmt::{Display, Formatter};
use std::str::FromStr;

use enum_map::Enum;

use crate::errors::JosephusError;

/// Algorithm used to find the last survivor.
#[derive(Debug, Enum, Eq, PartialEq, Copy, Clone, Default)]
pub enum Strategy {
    /// Ordered sequence of survivors with removal by index.
    #[default]
    Roster,
    /// Index-linked circular list of survivors.
    Ring,
    /// `J(m) = (J(m - 1) + k) mod m`, no roster at all.
    Recurrence,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Roster => "roster",
            Strategy::Ring => "ring",
            Strategy::Recurrence => "recurrence",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = JosephusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roster" | "vector" => Ok(Strategy::Roster),
            "ring" => Ok(Strategy::Ring),
            "recurrence" | "formula" => Ok(Strategy::Recurrence),
            _ => Err(JosephusError::UnknownStrategy(s.to_string())),
        }
    }
}
