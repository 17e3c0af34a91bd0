// SPDX-License-Identifier: MPL-2.0
//! One-shot timers for auto-dismiss and exit transitions.
//!
//! Timers are plain deadlines kept in a queue owned by the manager. Nothing
//! fires on its own: the host calls [`Manager::tick`](super::Manager::tick)
//! (typically from a periodic subscription) and every entry whose deadline
//! has passed is handed back in deadline order. Time comes from a [`Clock`],
//! so tests can drive the queue with a [`ManualClock`].

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one clone and hand the
/// other to a manager.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Creates a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("now", &self.now.get())
            .finish()
    }
}

/// Handle to a scheduled timer. Cancelling through it is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Deadline-ordered queue of one-shot timers carrying an event `E`.
#[derive(Debug)]
pub struct Timers<E> {
    /// Pending entries keyed by (deadline, scheduling sequence).
    queue: BTreeMap<(Instant, u64), E>,
    /// Deadline of each pending handle, for cancellation.
    deadlines: HashMap<u64, Instant>,
    next_seq: u64,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self {
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<E> Timers<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, event: E) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((deadline, seq), event);
        self.deadlines.insert(seq, deadline);
        TimerHandle(seq)
    }

    /// Cancels a pending timer.
    ///
    /// Returns `true` if the timer was still pending. Cancelling a timer that
    /// already fired or was already cancelled does nothing.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.queue.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    /// Removes and returns the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerHandle, E)> {
        let (&(deadline, seq), _) = self.queue.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.deadlines.remove(&seq);
        self.queue
            .remove(&(deadline, seq))
            .map(|event| (TimerHandle(seq), event))
    }

    /// Returns whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|&(deadline, _)| deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
