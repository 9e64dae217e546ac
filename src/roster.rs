/// Survivors in seating order, eliminated one per round.
///
/// Iterating yields the original position of each eliminated player. Once the
/// iterator is exhausted exactly one player is left in the roster.
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<usize>,
    pointer: usize,
    step: u64,
}

impl Roster {
    pub(crate) fn new(players: usize, step: u64) -> Roster {
        debug_assert_ne!(players, 0);
        debug_assert_ne!(step, 0);
        Roster { players: (1..=players).collect(), pointer: 0, step }
    }

    /// Players still in the circle.
    pub fn remaining(&self) -> usize {
        self.players.len()
    }

    /// The last player standing, `None` while eliminations are pending.
    pub fn survivor(&self) -> Option<usize> {
        match self.players.as_slice() {
            &[last] => Some(last),
            _ => None,
        }
    }
}

impl Iterator for Roster {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let len = self.players.len();
        if len <= 1 {
            return None;
        }

        self.pointer = (self.pointer + advance(self.step, len)) % len;
        let eliminated = self.players.remove(self.pointer);
        // removed the tail, counting restarts at the head
        if self.pointer == self.players.len() {
            self.pointer = 0;
        }

        log::trace!("roster: eliminated {eliminated}, {} remaining", self.players.len());
        Some(eliminated)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rounds = self.players.len().saturating_sub(1);
        (rounds, Some(rounds))
    }
}

impl ExactSizeIterator for Roster {}

/// Positions to move past the counting start: `(step - 1) mod len`.
pub(crate) fn advance(step: u64, len: usize) -> usize {
    ((step - 1) % len as u64) as usize
}
