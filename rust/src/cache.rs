//! Conflict memoization for the schedule enumerator.
//!
//! Cartesian-product iteration usually changes a single slot between
//! consecutive candidates, so the pair that invalidated the previous
//! candidate is usually still present in the next one, and most slot pairs
//! of a new candidate were already verified against each other when the
//! last schedule was yielded. The cache remembers exactly those two facts.
//!
//! It is a pure optimization: enumeration must yield the same schedules in
//! the same order whether or not a cache is attached.

/// The last (slot, choice) pair found mutually incompatible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ConflictPair {
    slot_a: usize,
    pick_a: usize,
    slot_b: usize,
    pick_b: usize,
}

/// Memo of the last conflict seen and the last candidate yielded.
#[derive(Clone, Debug, Default)]
pub struct ConflictCache {
    last_conflict: Option<ConflictPair>,
    prev_valid: Vec<usize>,
}

impl ConflictCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the candidate still contains both halves of the last
    /// recorded conflict; such a candidate cannot be valid and needs no
    /// further checking.
    pub fn should_skip(&self, candidate: &[usize]) -> bool {
        match self.last_conflict {
            Some(c) => candidate[c.slot_a] == c.pick_a && candidate[c.slot_b] == c.pick_b,
            None => false,
        }
    }

    /// True if both slots hold the same choices as the last yielded
    /// candidate, meaning this pair is already proven compatible.
    pub fn pair_verified(&self, slot_a: usize, slot_b: usize, candidate: &[usize]) -> bool {
        !self.prev_valid.is_empty()
            && self.prev_valid[slot_a] == candidate[slot_a]
            && self.prev_valid[slot_b] == candidate[slot_b]
    }

    /// Record the pair that invalidated the current candidate.
    pub fn record_conflict(&mut self, slot_a: usize, pick_a: usize, slot_b: usize, pick_b: usize) {
        self.last_conflict = Some(ConflictPair {
            slot_a,
            pick_a,
            slot_b,
            pick_b,
        });
    }

    /// Record a fully verified candidate and clear the remembered conflict.
    pub fn record_valid(&mut self, candidate: &[usize]) {
        self.prev_valid.clear();
        self.prev_valid.extend_from_slice(candidate);
        self.last_conflict = None;
    }
}
