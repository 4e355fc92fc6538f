//! Lazy enumeration of mutually compatible section combinations.

use crate::cache::ConflictCache;
use crate::compat::sections_compatible;
use crate::config::CampusPolicy;
use crate::models::{CourseSlot, Section};

/// Iterator over every conflict-free choice of one section per slot.
///
/// Candidates are visited in cartesian-product order with slot 0 varying
/// slowest; the yield order is therefore deterministic and independent of
/// whether pruning is enabled. The iterator is single-pass; enumeration
/// must be re-invoked to restart.
pub struct ScheduleEnumerator<'a> {
    slots: &'a [CourseSlot],
    policy: &'a CampusPolicy,
    positions: Vec<usize>,
    exhausted: bool,
    cache: Option<ConflictCache>,
}

impl<'a> ScheduleEnumerator<'a> {
    /// Enumerate with conflict memoization (the default).
    pub fn new(slots: &'a [CourseSlot], policy: &'a CampusPolicy) -> Self {
        Self::build(slots, policy, Some(ConflictCache::new()))
    }

    /// Enumerate with every slot pair re-checked on every candidate.
    /// Slower; exists so the pruning path can be verified against it.
    pub fn without_pruning(slots: &'a [CourseSlot], policy: &'a CampusPolicy) -> Self {
        Self::build(slots, policy, None)
    }

    fn build(slots: &'a [CourseSlot], policy: &'a CampusPolicy, cache: Option<ConflictCache>) -> Self {
        // Any empty slot empties the whole product; an empty request is
        // a degenerate call, not a request for the empty schedule.
        let exhausted = slots.is_empty() || slots.iter().any(|s| s.sections.is_empty());
        Self {
            slots,
            policy,
            positions: vec![0; slots.len()],
            exhausted,
            cache,
        }
    }

    /// Advance the position odometer one tick (rightmost slot fastest).
    fn advance(&mut self) {
        for slot in (0..self.positions.len()).rev() {
            self.positions[slot] += 1;
            if self.positions[slot] < self.slots[slot].sections.len() {
                return;
            }
            self.positions[slot] = 0;
        }
        self.exhausted = true;
    }

    /// Check all slot pairs of a candidate, updating the cache.
    fn candidate_valid(&mut self, candidate: &[usize]) -> bool {
        for slot_a in 0..candidate.len() {
            for slot_b in slot_a + 1..candidate.len() {
                if let Some(cache) = &self.cache {
                    if cache.pair_verified(slot_a, slot_b, candidate) {
                        continue;
                    }
                }
                let a = &self.slots[slot_a].sections[candidate[slot_a]];
                let b = &self.slots[slot_b].sections[candidate[slot_b]];
                if !sections_compatible(a, b, self.policy) {
                    if let Some(cache) = &mut self.cache {
                        cache.record_conflict(slot_a, candidate[slot_a], slot_b, candidate[slot_b]);
                    }
                    return false;
                }
            }
        }
        if let Some(cache) = &mut self.cache {
            cache.record_valid(candidate);
        }
        true
    }
}

impl<'a> Iterator for ScheduleEnumerator<'a> {
    type Item = Vec<&'a Section>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            let candidate = self.positions.clone();
            self.advance();
            if let Some(cache) = &self.cache {
                if cache.should_skip(&candidate) {
                    continue;
                }
            }
            if self.candidate_valid(&candidate) {
                return Some(
                    candidate
                        .iter()
                        .enumerate()
                        .map(|(slot, &pick)| &self.slots[slot].sections[pick])
                        .collect(),
                );
            }
        }
        None
    }
}
