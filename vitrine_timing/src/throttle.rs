// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading-edge throttling.
//!
//! A [`Throttle`] opens a window on the first accepted call. Calls that land
//! inside the window are rejected outright; the first call at or after the end
//! of the window is accepted and opens a new one. There is no trailing call.

use core::fmt;

/// Time gate that accepts at most one call per interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Throttle {
    interval: u64,
    window_end: Option<u64>,
}

impl Throttle {
    /// Creates a throttle with the given interval in milliseconds.
    #[must_use]
    pub const fn new(interval: u64) -> Self {
        Self {
            interval,
            window_end: None,
        }
    }

    /// Returns the configured interval in milliseconds.
    #[must_use]
    pub const fn interval(&self) -> u64 {
        self.interval
    }

    /// Returns `true` if a call at `now` would be accepted.
    #[must_use]
    pub fn is_open(&self, now: u64) -> bool {
        self.window_end.is_none_or(|end| now >= end)
    }

    /// Attempts to pass through the gate at time `now`.
    ///
    /// Returns `true` and restarts the window when accepted, `false` when the
    /// call falls inside the current window.
    pub fn try_fire(&mut self, now: u64) -> bool {
        if !self.is_open(now) {
            return false;
        }
        self.window_end = Some(now.saturating_add(self.interval));
        true
    }

    /// Forgets the current window so the next call is accepted.
    pub fn reset(&mut self) {
        self.window_end = None;
    }

    /// Wraps `callback` so it is only invoked when this gate accepts the call.
    #[must_use]
    pub fn wrap<F>(self, callback: F) -> Throttled<F> {
        Throttled {
            gate: self,
            callback,
        }
    }
}

/// A callback guarded by a [`Throttle`].
///
/// ```rust
/// use vitrine_timing::Throttled;
///
/// let mut hits = 0;
/// let mut wrapped = Throttled::new(100, |step: u32| {
///     hits += 1;
///     step * 2
/// });
///
/// assert_eq!(wrapped.call(0, 1), Some(2));
/// assert_eq!(wrapped.call(40, 2), None);
/// assert_eq!(wrapped.call(100, 3), Some(6));
/// drop(wrapped);
/// assert_eq!(hits, 2);
/// ```
pub struct Throttled<F> {
    gate: Throttle,
    callback: F,
}

impl<F> Throttled<F> {
    /// Wraps `callback` with a fresh throttle of `interval` milliseconds.
    #[must_use]
    pub const fn new(interval: u64, callback: F) -> Self {
        Self {
            gate: Throttle::new(interval),
            callback,
        }
    }

    /// Invokes the wrapped callback with `arg` if the gate is open at `now`.
    ///
    /// Returns `None` when the call was dropped.
    pub fn call<A, R>(&mut self, now: u64, arg: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.gate.try_fire(now) {
            Some((self.callback)(arg))
        } else {
            None
        }
    }

    /// Returns the underlying gate.
    #[must_use]
    pub fn gate(&self) -> &Throttle {
        &self.gate
    }
}

impl<F> fmt::Debug for Throttled<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_passes_immediately() {
        let mut gate = Throttle::new(100);
        assert!(gate.is_open(0));
        assert!(gate.try_fire(0));
        assert!(!gate.is_open(0));
    }

    #[test]
    fn ten_calls_within_one_window_fire_once() {
        let mut count = 0;
        let mut wrapped = Throttled::new(100, |()| count += 1);
        for t in 0..10 {
            let _ = wrapped.call(t * 9, ());
        }
        drop(wrapped);
        assert_eq!(count, 1);
    }

    #[test]
    fn window_restarts_from_accepted_call() {
        let mut gate = Throttle::new(100);
        assert!(gate.try_fire(10));
        assert!(!gate.try_fire(109));
        assert!(gate.try_fire(150));
        // The new window is anchored at 150, not at 110.
        assert!(!gate.try_fire(249));
        assert!(gate.try_fire(250));
    }

    #[test]
    fn dropped_calls_are_not_replayed() {
        let mut seen = alloc::vec::Vec::new();
        let mut wrapped = Throttled::new(50, |v: u32| seen.push(v));
        let _ = wrapped.call(0, 1);
        let _ = wrapped.call(10, 2);
        let _ = wrapped.call(20, 3);
        let _ = wrapped.call(60, 4);
        drop(wrapped);
        assert_eq!(seen, [1, 4]);
    }

    #[test]
    fn reset_reopens_the_gate() {
        let mut gate = Throttle::new(1_000);
        assert!(gate.try_fire(0));
        gate.reset();
        assert!(gate.try_fire(1));
    }

    #[test]
    fn zero_interval_never_blocks() {
        let mut gate = Throttle::new(0);
        assert!(gate.try_fire(5));
        assert!(gate.try_fire(5));
    }
}
