// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-position reveal latch.

use alloc::vec;
use alloc::vec::Vec;

/// Distance above the bottom of the viewport an element's top must cross.
pub const DEFAULT_REVEAL_OFFSET: f64 = 100.0;

/// Returns `true` if an element whose top edge sits at `top` (viewport
/// coordinates) should be revealed.
///
/// The comparison is strict: an element exactly on the reveal line stays hidden.
#[must_use]
pub fn should_reveal(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

/// Latches a fixed list of elements into the revealed state.
///
/// Elements are addressed by their index in document order. Once revealed an
/// element stays revealed; [`RevealSet::update`] only reports newly revealed
/// indices, so hosts can apply class changes without redundant writes.
#[derive(Clone, Debug)]
pub struct RevealSet {
    offset: f64,
    active: Vec<bool>,
}

impl RevealSet {
    /// Creates a set of `len` hidden elements using [`DEFAULT_REVEAL_OFFSET`].
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::with_offset(len, DEFAULT_REVEAL_OFFSET)
    }

    /// Creates a set of `len` hidden elements with a custom reveal offset.
    #[must_use]
    pub fn with_offset(len: usize, offset: f64) -> Self {
        Self {
            offset,
            active: vec![false; len],
        }
    }

    /// Number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns `true` if element `index` has been revealed.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Number of revealed elements.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }

    /// Returns `true` once every element has been revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.active.iter().all(|a| *a)
    }

    /// Runs one reveal pass.
    ///
    /// `top_of` returns the current top edge of element `index` in viewport
    /// coordinates, or `None` if the element is gone. Already revealed elements
    /// are not queried. Returns the indices revealed by this pass.
    pub fn update(
        &mut self,
        viewport_height: f64,
        mut top_of: impl FnMut(usize) -> Option<f64>,
    ) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (index, active) in self.active.iter_mut().enumerate() {
            if *active {
                continue;
            }
            let Some(top) = top_of(index) else {
                continue;
            };
            if should_reveal(top, viewport_height, self.offset) {
                *active = true;
                revealed.push(index);
            }
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_line_is_strict() {
        assert!(should_reveal(499.0, 600.0, 100.0));
        assert!(!should_reveal(500.0, 600.0, 100.0));
    }

    #[test]
    fn update_reports_only_new_reveals() {
        let tops = [100.0, 550.0, 900.0];
        let mut set = RevealSet::new(tops.len());

        assert_eq!(set.update(600.0, |i| tops.get(i).copied()), [0]);
        assert_eq!(set.active_count(), 1);

        // Scrolling down 400 puts element 2 exactly on the line.
        let scrolled = tops.map(|t| t - 400.0);
        assert_eq!(set.update(600.0, |i| scrolled.get(i).copied()), [1]);
        assert!(!set.is_complete());

        // One more pixel crosses it.
        let scrolled = tops.map(|t| t - 401.0);
        assert_eq!(set.update(600.0, |i| scrolled.get(i).copied()), [2]);
        assert!(set.is_complete());

        // Idempotent.
        assert!(set.update(600.0, |i| scrolled.get(i).copied()).is_empty());
    }

    #[test]
    fn revealed_elements_stay_revealed_when_scrolled_away() {
        let mut set = RevealSet::new(1);
        set.update(600.0, |_| Some(0.0));
        set.update(600.0, |_| Some(5_000.0));
        assert!(set.is_active(0));
    }

    #[test]
    fn missing_elements_are_skipped() {
        let mut set = RevealSet::new(2);
        assert_eq!(set.update(600.0, |i| (i == 1).then_some(0.0)), [1]);
        assert!(!set.is_active(0));
        assert!(!set.is_active(9));
    }
}
