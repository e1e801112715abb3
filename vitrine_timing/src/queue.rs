// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered timer queue with cancellation.

use alloc::collections::BinaryHeap;
use core::cmp::Reverse;

use hashbrown::HashMap;

/// Handle returned by [`TimerQueue::schedule`].
///
/// Handles are never reused within a queue, so a stale handle can be passed
/// to [`TimerQueue::cancel`] safely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A queue of payloads waiting for a deadline.
///
/// Deadlines are absolute millisecond timestamps on the caller's clock. Entries
/// with equal deadlines fire in the order they were scheduled. Cancelled
/// entries are dropped immediately and never returned by [`TimerQueue::pop_due`].
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<(u64, u64)>>,
    pending: HashMap<u64, (u64, T)>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pending: HashMap::new(),
            next_id: 0,
        }
    }

    /// Returns the number of live (scheduled, not cancelled) timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no timers are scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedules `payload` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.heap.push(Reverse((deadline, id)));
        self.pending.insert(id, (deadline, payload));
        TimerId(id)
    }

    /// Cancels a timer, returning its payload if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let (_, payload) = self.pending.remove(&id.0)?;
        self.prune();
        Some(payload)
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        // `prune` keeps the heap top live.
        self.heap.peek().map(|Reverse((deadline, _))| *deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    ///
    /// Call repeatedly to drain every due timer.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, T)> {
        let Reverse((deadline, id)) = *self.heap.peek()?;
        if deadline > now {
            return None;
        }
        self.heap.pop();
        let entry = self.pending.remove(&id);
        self.prune();
        entry.map(|(_, payload)| (TimerId(id), payload))
    }

    /// Drops cancelled entries from the top of the heap.
    fn prune(&mut self) {
        while let Some(Reverse((_, id))) = self.heap.peek() {
            if self.pending.contains_key(id) {
                break;
            }
            self.heap.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn drain<T>(queue: &mut TimerQueue<T>, now: u64) -> Vec<T> {
        let mut out = Vec::new();
        while let Some((_, payload)) = queue.pop_due(now) {
            out.push(payload);
        }
        out
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(300, 'c');
        q.schedule(100, 'a');
        q.schedule(200, 'b');
        assert_eq!(q.next_deadline(), Some(100));
        assert_eq!(drain(&mut q, 1_000), ['a', 'b', 'c']);
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(50, 1);
        q.schedule(50, 2);
        q.schedule(50, 3);
        assert_eq!(drain(&mut q, 50), [1, 2, 3]);
    }

    #[test]
    fn nothing_fires_early() {
        let mut q = TimerQueue::new();
        q.schedule(4_000, ());
        assert!(q.pop_due(3_999).is_none());
        assert!(q.pop_due(4_000).is_some());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut q = TimerQueue::new();
        let stale = q.schedule(100, "stale");
        let fresh = q.schedule(200, "fresh");
        assert_eq!(q.cancel(stale), Some("stale"));
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(200));
        assert_eq!(q.pop_due(1_000), Some((fresh, "fresh")));
        assert!(q.pop_due(1_000).is_none());
    }

    #[test]
    fn cancelling_a_buried_timer_is_skipped_later() {
        let mut q = TimerQueue::new();
        q.schedule(100, 'a');
        let buried = q.schedule(200, 'b');
        q.schedule(300, 'c');
        q.cancel(buried);
        assert_eq!(drain(&mut q, 150), ['a']);
        assert_eq!(q.next_deadline(), Some(300));
        assert_eq!(drain(&mut q, 1_000), ['c']);
    }

    #[test]
    fn cancel_twice_returns_none() {
        let mut q = TimerQueue::new();
        let id = q.schedule(10, ());
        assert!(q.cancel(id).is_some());
        assert!(q.cancel(id).is_none());
        assert!(q.is_empty());
        assert_eq!(q.next_deadline(), None);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut q = TimerQueue::new();
        let first = q.schedule(10, ());
        let _ = q.pop_due(10);
        let second = q.schedule(10, ());
        assert_ne!(first, second);
        assert!(q.cancel(first).is_none());
        assert_eq!(q.cancel(second), Some(()));
    }
}
