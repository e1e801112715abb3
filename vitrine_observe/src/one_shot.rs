// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-once visibility observer.
//!
//! ## Usage
//!
//! 1) Create an observer with a visibility threshold (for example `0.1` for
//!    "10% on screen").
//! 2) [`OneShotObserver::observe`] every key the host wants to watch.
//! 3) Feed visibility samples with [`OneShotObserver::report`]; it returns
//!    `true` exactly once per key, the first time the sample meets the
//!    threshold. The key is then removed and the host should release any
//!    native observer registration for it.

use core::hash::Hash;

use hashbrown::HashSet;

use crate::visibility::Visibility;

/// Watches a set of keys and triggers each one at most once.
#[derive(Clone, Debug)]
pub struct OneShotObserver<K> {
    threshold: f64,
    watching: HashSet<K>,
    triggered: HashSet<K>,
}

impl<K: Eq + Hash + Clone> OneShotObserver<K> {
    /// Creates an observer that triggers at `threshold` visibility.
    ///
    /// The threshold is clamped to `[0, 1]`. A threshold of `0` triggers as
    /// soon as the element touches the viewport.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            watching: HashSet::new(),
            triggered: HashSet::new(),
        }
    }

    /// Returns the visibility threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Starts watching `key`.
    ///
    /// Returns `false` if the key is already watched or has already fired;
    /// a fired key never re-enters observation.
    pub fn observe(&mut self, key: K) -> bool {
        if self.triggered.contains(&key) {
            return false;
        }
        self.watching.insert(key)
    }

    /// Stops watching `key` without triggering it.
    pub fn unobserve(&mut self, key: &K) -> bool {
        self.watching.remove(key)
    }

    /// Returns `true` if `key` is still waiting to trigger.
    #[must_use]
    pub fn is_observed(&self, key: &K) -> bool {
        self.watching.contains(key)
    }

    /// Returns `true` if `key` has already triggered.
    #[must_use]
    pub fn has_triggered(&self, key: &K) -> bool {
        self.triggered.contains(key)
    }

    /// Number of keys still waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.watching.len()
    }

    /// Returns `true` if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watching.is_empty()
    }

    /// Reports a visibility sample for `key`.
    ///
    /// Returns `true` if this sample triggered the key. Samples for keys that
    /// are not watched are ignored.
    pub fn report(&mut self, key: &K, visibility: Visibility) -> bool {
        if !self.watching.contains(key) || !visibility.meets(self.threshold) {
            return false;
        }
        self.watching.remove(key);
        self.triggered.insert(key.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_once_across_repeated_scrolls() {
        let mut obs = OneShotObserver::new(0.1);
        obs.observe(1_u32);

        let mut fired = 0;
        for ratio in [0.0, 0.05, 0.3, 0.0, 0.8, 0.0, 1.0] {
            if obs.report(&1, Visibility::new(ratio)) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(obs.has_triggered(&1));
        assert!(!obs.is_observed(&1));
    }

    #[test]
    fn below_threshold_keeps_waiting() {
        let mut obs = OneShotObserver::new(0.5);
        obs.observe("stats");
        assert!(!obs.report(&"stats", Visibility::new(0.49)));
        assert!(obs.is_observed(&"stats"));
        assert!(obs.report(&"stats", Visibility::new(0.5)));
    }

    #[test]
    fn fired_keys_cannot_be_reobserved() {
        let mut obs = OneShotObserver::new(0.0);
        assert!(obs.observe(3_u8));
        assert!(!obs.observe(3));
        assert!(obs.report(&3, Visibility::new(1.0)));
        assert!(!obs.observe(3));
        assert!(obs.is_empty());
    }

    #[test]
    fn unobserved_keys_are_ignored() {
        let mut obs = OneShotObserver::new(0.0);
        obs.observe(9_u32);
        assert!(obs.unobserve(&9));
        assert!(!obs.report(&9, Visibility::new(1.0)));
        assert!(!obs.has_triggered(&9));
        assert!(!obs.report(&10, Visibility::new(1.0)));
    }

    #[test]
    fn zero_threshold_needs_contact() {
        let mut obs = OneShotObserver::new(0.0);
        obs.observe(1_u32);
        assert!(!obs.report(&1, Visibility::hidden()));
        assert!(obs.report(&1, Visibility::from_entry(0.0, true)));
    }
}
