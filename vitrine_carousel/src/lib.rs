// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Carousel: a cyclic slide show with timed auto-advance.
//!
//! [`Carousel`] is a headless state machine. It owns the current slide index
//! and the deadline of the next automatic advance, but never reads a clock or
//! arms a native timer: the host passes `now` (milliseconds) into every
//! operation and calls [`Carousel::tick`] when [`Carousel::deadline`] passes.
//!
//! Behavior:
//!
//! - The index always lies in `0..len`. Moving past the last slide wraps to the
//!   first, moving before the first wraps to the last.
//! - Auto-advance runs every [`DEFAULT_PERIOD_MS`] while started.
//! - Manual navigation ([`Carousel::jump`], [`Carousel::step`]) cancels the
//!   pending advance and schedules a fresh one a full period later, so a manual
//!   change is always on screen for one whole period.
//! - Pointer hover pauses auto-advance; leaving restarts it with a full period.
//!
//! A carousel cannot be built with zero slides; [`Carousel::new`] returns
//! `None` and hosts simply skip the feature.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_carousel::{Carousel, Direction};
//!
//! let mut carousel = Carousel::new(3).unwrap();
//! carousel.start(0);
//! assert_eq!(carousel.deadline(), Some(4_000));
//!
//! // Timer fires: advance to slide 1.
//! let change = carousel.tick(4_000).unwrap();
//! assert_eq!((change.previous, change.current), (0, 1));
//!
//! // Arrow key at t=5000 restarts the period.
//! carousel.step(Direction::Backward, 5_000);
//! assert_eq!(carousel.current(), 0);
//! assert_eq!(carousel.deadline(), Some(9_000));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Auto-advance period in milliseconds.
pub const DEFAULT_PERIOD_MS: u64 = 4_000;

/// Direction of a single-step move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices (wrapping to `0`).
    Forward,
    /// Towards lower indices (wrapping to `len - 1`).
    Backward,
}

/// Result of a slide transition.
///
/// Hosts clear the active marker from `previous` and set it on `current`
/// (for both the slide and its dot).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlideChange {
    /// Slide that was showing.
    pub previous: usize,
    /// Slide now showing.
    pub current: usize,
}

impl SlideChange {
    /// Returns `true` if the visible slide did not change.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

/// Slide show state: current index plus the auto-advance deadline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    period: u64,
    deadline: Option<u64>,
}

impl Carousel {
    /// Creates a stopped carousel showing slide `0`.
    ///
    /// Returns `None` when `len` is zero.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            current: 0,
            period: DEFAULT_PERIOD_MS,
            deadline: None,
        })
    }

    /// Sets the auto-advance period in milliseconds (minimum `1`).
    #[must_use]
    pub fn with_period(mut self, period: u64) -> Self {
        self.period = period.max(1);
        self
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; present for symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the visible slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns `true` if slide (or dot) `index` carries the active marker.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Auto-advance period in milliseconds.
    #[must_use]
    pub fn period(&self) -> u64 {
        self.period
    }

    /// Timestamp of the next automatic advance, or `None` while stopped.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while auto-advance is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Starts auto-advance; the first advance happens one period after `now`.
    ///
    /// Any previously scheduled advance is discarded.
    pub fn start(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.period));
    }

    /// Cancels auto-advance.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Shows slide `index`, wrapping out-of-range values.
    ///
    /// An index past the end shows the first slide; a negative index shows the
    /// last. The timer is not touched.
    pub fn show(&mut self, index: isize) -> SlideChange {
        let previous = self.current;
        self.current = match usize::try_from(index) {
            Ok(i) if i < self.len => i,
            Ok(_) => 0,
            Err(_) => self.len - 1,
        };
        SlideChange {
            previous,
            current: self.current,
        }
    }

    /// Advances one slide without touching the timer.
    pub fn next(&mut self) -> SlideChange {
        self.advance_by(1)
    }

    /// Goes back one slide without touching the timer.
    pub fn prev(&mut self) -> SlideChange {
        let previous = self.current;
        self.current = if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        };
        SlideChange {
            previous,
            current: self.current,
        }
    }

    /// Manual jump (dot click): restarts the period from `now`.
    pub fn jump(&mut self, index: usize, now: u64) -> SlideChange {
        self.stop();
        let change = self.show(isize::try_from(index).unwrap_or(isize::MAX));
        self.start(now);
        change
    }

    /// Manual single step (arrow key): restarts the period from `now`.
    pub fn step(&mut self, direction: Direction, now: u64) -> SlideChange {
        self.stop();
        let change = match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.prev(),
        };
        self.start(now);
        change
    }

    /// Pointer entered the carousel: pause.
    pub fn pointer_enter(&mut self) {
        self.stop();
    }

    /// Pointer left the carousel: resume with a full period.
    pub fn pointer_leave(&mut self, now: u64) {
        self.start(now);
    }

    /// Drives auto-advance.
    ///
    /// Advances once for every period that elapsed since the deadline was
    /// armed, so a host that wakes late still lands on the right slide.
    /// Returns `None` if stopped or not yet due.
    pub fn tick(&mut self, now: u64) -> Option<SlideChange> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        let periods = (now - deadline) / self.period + 1;
        self.deadline = Some(deadline.saturating_add(periods.saturating_mul(self.period)));
        #[expect(
            clippy::cast_possible_truncation,
            reason = "only the value modulo `len` matters, and `len` is a usize"
        )]
        let steps = (periods % self.len as u64) as usize;
        Some(self.advance_by(steps))
    }

    fn advance_by(&mut self, steps: usize) -> SlideChange {
        let previous = self.current;
        self.current = (self.current + steps % self.len) % self.len;
        SlideChange {
            previous,
            current: self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len).unwrap()
    }

    #[test]
    fn zero_slides_disables_the_carousel() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn next_wraps_to_first() {
        let mut c = carousel(3);
        c.show(2);
        assert_eq!(c.next(), SlideChange { previous: 2, current: 0 });
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut c = carousel(3);
        assert_eq!(c.prev(), SlideChange { previous: 0, current: 2 });
    }

    #[test]
    fn index_stays_in_range_over_many_moves() {
        let mut c = carousel(4);
        for i in 0..50 {
            if i % 3 == 0 {
                c.prev();
            } else {
                c.next();
            }
            assert!(c.current() < c.len());
        }
    }

    #[test]
    fn show_out_of_range_follows_wrap_rules() {
        let mut c = carousel(3);
        c.show(7);
        assert_eq!(c.current(), 0);
        c.show(-1);
        assert_eq!(c.current(), 2);
        c.show(1);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn tick_advances_on_period() {
        let mut c = carousel(3);
        c.start(100);
        assert_eq!(c.tick(4_099), None);
        assert_eq!(c.tick(4_100), Some(SlideChange { previous: 0, current: 1 }));
        assert_eq!(c.deadline(), Some(8_100));
    }

    #[test]
    fn late_tick_catches_up() {
        let mut c = carousel(5);
        c.start(0);
        // Three periods elapsed (4000, 8000, 12000).
        let change = c.tick(12_500).unwrap();
        assert_eq!(change.current, 3);
        assert_eq!(c.deadline(), Some(16_000));
    }

    #[test]
    fn manual_interaction_restarts_full_period() {
        let mut c = carousel(3);
        c.start(0);
        c.jump(2, 3_900);
        assert_eq!(c.current(), 2);
        // The stale 4000 deadline must not fire.
        assert_eq!(c.tick(4_000), None);
        assert_eq!(c.tick(7_899), None);
        assert_eq!(c.tick(7_900).map(|ch| ch.current), Some(0));

        c.step(Direction::Forward, 10_000);
        assert_eq!(c.deadline(), Some(14_000));
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut c = carousel(2);
        c.start(0);
        c.pointer_enter();
        assert!(!c.is_running());
        assert_eq!(c.tick(1_000_000), None);
        c.pointer_leave(1_000_000);
        assert_eq!(c.deadline(), Some(1_004_000));
    }

    #[test]
    fn single_slide_tick_is_noop_change() {
        let mut c = carousel(1);
        c.start(0);
        assert!(c.tick(4_000).unwrap().is_noop());
    }

    #[test]
    fn exactly_one_active_marker() {
        let mut c = carousel(4);
        c.jump(3, 0);
        let active = (0..c.len()).filter(|i| c.is_active(*i)).count();
        assert_eq!(active, 1);
        assert!(c.is_active(3));
    }
}
