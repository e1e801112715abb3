// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Timing: host-agnostic rate limiting and deferred-callback bookkeeping.
//!
//! Page behaviors react to a stream of browser events, but the logic that
//! decides *when* something should happen does not need a browser. This crate
//! models time as a caller-supplied millisecond clock (`u64`) and provides two
//! small primitives:
//!
//! - [`Throttle`] / [`Throttled`]: let the first call through, then drop every
//!   call until a fixed window has elapsed. Skipped calls are never queued.
//! - [`TimerQueue`]: a deadline-ordered queue of payloads with explicit
//!   cancellation. Hosts arm a single native timeout for
//!   [`TimerQueue::next_deadline`] and pop due entries when it fires.
//!
//! Neither type reads a clock itself; callers pass `now` into every operation.
//! That keeps the logic deterministic under test and lets the same code run on
//! top of `setTimeout`, a frame loop, or a simulated clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_timing::{Throttle, TimerQueue};
//!
//! let mut gate = Throttle::new(100);
//! assert!(gate.try_fire(0));
//! assert!(!gate.try_fire(50));
//! assert!(gate.try_fire(100));
//!
//! let mut timers = TimerQueue::new();
//! let hide = timers.schedule(500, "hide loader");
//! let toast = timers.schedule(3000, "dismiss toast");
//! timers.cancel(toast);
//!
//! assert_eq!(timers.next_deadline(), Some(500));
//! assert_eq!(timers.pop_due(499), None);
//! assert_eq!(timers.pop_due(500), Some((hide, "hide loader")));
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;
mod throttle;

pub use queue::{TimerId, TimerQueue};
pub use throttle::{Throttle, Throttled};
