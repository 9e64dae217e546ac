use crate::roster::advance;

/// Circular singly linked list of survivors stored in a slot vector.
///
/// Slot `i` holds player `i + 1`, `next[i]` is the following survivor. The
/// cursor points at the slot *before* the next counting start, so unlinking
/// the counted player needs no backward walk.
#[derive(Debug, Clone)]
pub struct Ring {
    next: Vec<usize>,
    cursor: usize,
    len: usize,
    step: u64,
}

impl Ring {
    pub(crate) fn new(players: usize, step: u64) -> Ring {
        debug_assert_ne!(players, 0);
        debug_assert_ne!(step, 0);
        Ring { next: (0..players).map(|i| (i + 1) % players).collect(), cursor: players - 1, len: players, step }
    }

    pub fn remaining(&self) -> usize {
        self.len
    }

    pub fn survivor(&self) -> Option<usize> {
        if self.len == 1 {
            Some(self.cursor + 1)
        } else {
            None
        }
    }

    fn unlink_next(&mut self) -> usize {
        let victim = self.next[self.cursor];
        self.next[self.cursor] = self.next[victim];
        self.len -= 1;
        victim
    }
}

impl Iterator for Ring {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.len <= 1 {
            return None;
        }

        for _ in 0..advance(self.step, self.len) {
            self.cursor = self.next[self.cursor];
        }
        let eliminated = self.unlink_next() + 1;

        log::trace!("ring: eliminated {eliminated}, {} remaining", self.len);
        Some(eliminated)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rounds = self.len.saturating_sub(1);
        (rounds, Some(rounds))
    }
}

impl ExactSizeIterator for Ring {}
