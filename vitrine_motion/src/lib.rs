// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Motion: small animation models for page decoration.
//!
//! - [`counter`]: count a statistic up from zero with a cubic ease-out, one
//!   step per display frame, and format it for display (`"1,000+"`).
//! - [`parallax`]: offset decorative shapes proportionally to the pointer's
//!   distance from the viewport center.
//! - [`stagger_delay`]: per-item transition delays for grid entrance effects.
//!
//! Everything here is a pure function of its inputs or a state machine
//! advanced with an explicit timestamp; nothing schedules frames itself.
//!
//! ```rust
//! use vitrine_motion::counter::CounterAnimation;
//!
//! let mut counter = CounterAnimation::new(1_000, 0);
//! assert_eq!(counter.tick(0).value, 0);
//! let last = counter.tick(2_000);
//! assert!(last.finished);
//! assert_eq!(counter.label(last.value), "1,000+");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod counter;
pub mod parallax;

/// Transition delay in seconds for the `index`-th item of a staggered group.
#[must_use]
pub fn stagger_delay(index: usize, step_seconds: f64) -> f64 {
    index as f64 * step_seconds
}

#[cfg(test)]
mod tests {
    use super::stagger_delay;

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay(0, 0.1), 0.0);
        assert_eq!(stagger_delay(2, 0.15), 0.3);
        assert!(stagger_delay(5, 0.1) > stagger_delay(4, 0.1));
    }
}
