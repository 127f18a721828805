//! Reveal-on-scroll bookkeeping.
//!
//! Elements are tracked by their index in the observed list. Each reveals
//! at most once; after that further notifications are ignored even if the
//! element leaves and re-enters the viewport.

use std::collections::BTreeSet;

/// Minimum visible fraction before an element reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    pending: BTreeSet<usize>,
    revealed: usize,
}

impl RevealSet {
    /// Track elements `0..count`.
    pub fn register(count: usize) -> Self {
        Self {
            pending: (0..count).collect(),
            revealed: 0,
        }
    }

    #[cfg(test)]
    fn is_pending(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    #[cfg(test)]
    fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Feed one intersection notification.
    ///
    /// Returns `true` exactly when the element should receive the visible
    /// class and stop being observed.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting || !self.pending.remove(&index) {
            return false;
        }
        self.revealed += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reveals_on_first_intersection() {
        let mut set = RevealSet::register(2);
        assert!(!set.observe(0, false));
        assert!(set.is_pending(0));
        assert!(set.observe(0, true));
        assert!(!set.is_pending(0));
        assert_eq!(set.pending_count(), 1);
    }

    #[test]
    fn second_crossing_is_ignored() {
        let mut set = RevealSet::register(1);
        assert!(set.observe(0, true));
        assert!(!set.observe(0, false));
        assert!(!set.observe(0, true));
        assert_eq!(set.revealed_count(), 1);
        assert!(set.is_done());
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut set = RevealSet::register(1);
        assert!(!set.observe(5, true));
        assert_eq!(set.revealed_count(), 0);
    }

    proptest! {
        #[test]
        fn each_element_reveals_at_most_once(
            events in proptest::collection::vec((0usize..4, any::<bool>()), 0..64)
        ) {
            let mut set = RevealSet::register(4);
            let mut hits = [0usize; 4];
            for (index, intersecting) in events {
                if set.observe(index, intersecting) {
                    hits[index] += 1;
                }
            }
            for count in hits {
                prop_assert!(count <= 1);
            }
            prop_assert_eq!(set.revealed_count() + set.pending_count(), 4);
        }
    }
}
