//! Latest-wins bookkeeping for overlapping requests.
//!
//! Search-as-you-type can have several requests in flight for the same
//! logical slot, and nothing cancels the older ones; without bookkeeping the
//! last response to *complete* wins the render, which may be a stale one.
//! [`LatestSlot`] fixes the ordering: every attempt takes a generation from a
//! monotonic counter, and only the result whose generation is still current
//! gets applied. The superseded future keeps running; its result is simply
//! dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// A ticket for one attempt at a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// One logical "latest request" slot, e.g. the feed's search box.
#[derive(Debug, Default)]
pub struct LatestSlot {
    counter: AtomicU64,
}

impl LatestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new attempt, superseding every earlier one.
    pub fn issue(&self) -> Generation {
        Generation(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while no later attempt has been issued.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.counter.load(Ordering::SeqCst) == generation.0
    }

    /// Passes `value` through iff the attempt is still current; stale
    /// results come back as `None` and should be discarded.
    pub fn accept<T>(&self, generation: Generation, value: T) -> Option<T> {
        self.is_current(generation).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_generation_is_current() {
        let slot = LatestSlot::new();
        let first = slot.issue();
        assert!(slot.is_current(first));

        let second = slot.issue();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    #[test]
    fn accept_drops_stale_results() {
        let slot = LatestSlot::new();
        let stale = slot.issue();
        let fresh = slot.issue();

        // the older request happens to finish last
        assert_eq!(slot.accept(fresh, "fresh"), Some("fresh"));
        assert_eq!(slot.accept(stale, "stale"), None);
    }

    #[test]
    fn generations_are_strictly_increasing() {
        let slot = LatestSlot::new();
        let a = slot.issue();
        let b = slot.issue();
        assert_ne!(a, b);
        assert!(slot.is_current(b));
    }
}
