// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Count-up animation for headline statistics.
//!
//! ## Usage
//!
//! 1) Parse the label's current text with [`parse_stat_target`].
//! 2) Create a [`CounterAnimation`] with the target and the timestamp at which
//!    the label became visible.
//! 3) On every display frame call [`CounterAnimation::tick`] with the frame
//!    timestamp and write [`CounterAnimation::label`] into the element.
//! 4) Stop requesting frames once a tick reports `finished`.

use alloc::format;
use alloc::string::String;

/// Default animation length in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 2_000;

/// Targets at or above this value are displayed with thousands separators.
pub const GROUPING_THRESHOLD: u64 = 1_000;

/// Cubic ease-out: `1 - (1 - p)^3`, with `p` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let inv = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Extracts the target number from a statistic label such as `"1000+"`.
///
/// Every non-digit character is discarded and the remaining digits parsed.
/// Returns `None` when no digits remain or the number does not fit in a `u64`.
///
/// ```rust
/// use vitrine_motion::counter::parse_stat_target;
///
/// assert_eq!(parse_stat_target("100+"), Some(100));
/// assert_eq!(parse_stat_target("1,000+ users"), Some(1_000));
/// assert_eq!(parse_stat_target("Free"), None);
/// ```
#[must_use]
pub fn parse_stat_target(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Formats `value` with a `,` between every group of three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let raw = format!("{value}");
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One animation step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    /// Value to display for this frame.
    pub value: u64,
    /// `true` on the last frame; no further frames are needed.
    pub finished: bool,
}

/// Eased count from zero to a target over a fixed duration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    start: u64,
    duration: u64,
    finished: bool,
}

impl CounterAnimation {
    /// Starts an animation towards `target` at timestamp `start`.
    #[must_use]
    pub fn new(target: u64, start: u64) -> Self {
        Self {
            target,
            start,
            duration: DEFAULT_DURATION_MS,
            finished: false,
        }
    }

    /// Overrides the duration in milliseconds.
    #[must_use]
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    /// Final value of the animation.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Returns `true` once the final frame has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Linear progress in `[0, 1]` at timestamp `now`.
    #[must_use]
    pub fn progress(&self, now: u64) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        if elapsed >= self.duration {
            return 1.0;
        }
        elapsed as f64 / self.duration as f64
    }

    /// Advances the animation to timestamp `now`.
    ///
    /// Frames stamped before `start` show `0`. Once `now - start` reaches the
    /// duration the frame is forced to the exact target and marked finished.
    pub fn tick(&mut self, now: u64) -> CounterFrame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.finished = true;
            return CounterFrame {
                value: self.target,
                finished: true,
            };
        }
        let eased = ease_out_cubic(progress);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "flooring a non-negative value that never exceeds the u64 target"
        )]
        let value = ((self.target as f64) * eased) as u64;
        CounterFrame {
            value: value.min(self.target),
            finished: false,
        }
    }

    /// Display text for `value`: grouped digits for large targets, then `+`.
    #[must_use]
    pub fn label(&self, value: u64) -> String {
        let mut text = if self.target >= GROUPING_THRESHOLD {
            group_thousands(value)
        } else {
            format!("{value}")
        };
        text.push('+');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn target_parsing_strips_non_digits() {
        assert_eq!(parse_stat_target("50+"), Some(50));
        assert_eq!(parse_stat_target("1000+"), Some(1_000));
        assert_eq!(parse_stat_target("4.8"), Some(48));
        assert_eq!(parse_stat_target(""), None);
        assert_eq!(parse_stat_target("99999999999999999999999"), None);
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn reaches_target_at_duration() {
        let mut c = CounterAnimation::new(100, 500);
        let frame = c.tick(2_499);
        assert!(!frame.finished);
        assert!(frame.value < 100);
        let frame = c.tick(2_500);
        assert_eq!(frame, CounterFrame { value: 100, finished: true });
        assert_eq!(c.label(frame.value), "100+");
        assert!(c.is_finished());
    }

    #[test]
    fn values_never_decrease() {
        let mut c = CounterAnimation::new(100, 0);
        let mut last = 0;
        for t in (0..=2_100).step_by(16) {
            let frame = c.tick(t);
            assert!(frame.value >= last, "dropped from {last} to {}", frame.value);
            last = frame.value;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn frames_before_start_show_zero() {
        let mut c = CounterAnimation::new(50, 1_000);
        assert_eq!(c.tick(990).value, 0);
    }

    #[test]
    fn small_targets_are_not_grouped() {
        let c = CounterAnimation::new(50, 0);
        assert_eq!(c.label(7), "7+");
        let big = CounterAnimation::new(5_000, 0);
        assert_eq!(big.label(2_500), "2,500+");
        assert_eq!(big.label(12), "12+");
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut c = CounterAnimation::new(10, 0).with_duration(0);
        assert!(c.tick(0).finished);
    }
}
