// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One visibility sample for an observed element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Visibility {
    /// Visible fraction of the element in `[0, 1]`.
    pub ratio: f64,
    /// Whether the element touches the viewport at all.
    pub intersecting: bool,
}

impl Visibility {
    /// A sample with the given ratio; any positive ratio counts as intersecting.
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            intersecting: ratio > 0.0,
        }
    }

    /// A sample for an element entirely outside the viewport.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            ratio: 0.0,
            intersecting: false,
        }
    }

    /// A sample as reported by a native observer entry.
    #[must_use]
    pub fn from_entry(ratio: f64, intersecting: bool) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            intersecting,
        }
    }

    /// Returns `true` if this sample satisfies `threshold`.
    #[must_use]
    pub fn meets(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_ratio_counts_as_intersecting() {
        let v = Visibility::new(0.25);
        assert!(v.intersecting);
        assert!(v.meets(0.1));
        assert!(!v.meets(0.5));
        assert_eq!(Visibility::new(2.0).ratio, 1.0);
    }

    #[test]
    fn threshold_requires_intersection() {
        // An element touching the viewport edge: intersecting with no area.
        let edge = Visibility::from_entry(0.0, true);
        assert!(edge.meets(0.0));
        assert!(!edge.meets(0.1));
        assert!(!Visibility::hidden().meets(0.0));
        assert!(!Visibility::from_entry(0.0, false).meets(0.0));
    }
}
