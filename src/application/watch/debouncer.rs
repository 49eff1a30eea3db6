//! Quiet-period debouncer
//!
//! Collects actions and releases them once no newer action for the same key
//! (keyed mode) or for any key (shared mode) arrived within the delay. The
//! caller supplies `now`, so the debouncer never sleeps and never spawns.

use std::time::{Duration, Instant};

/// How pending actions are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceMode {
    /// One pending action per key; rescheduling a key restarts only its window
    Keyed,
    /// One pending action in total; any schedule replaces it
    #[default]
    Shared,
}

struct Pending<K, A> {
    key: K,
    action: A,
    deadline: Instant,
}

pub struct Debouncer<K, A> {
    mode: DebounceMode,
    pending: Vec<Pending<K, A>>,
    disposed: bool,
}

impl<K: PartialEq, A> Debouncer<K, A> {
    pub fn new(mode: DebounceMode) -> Self {
        Self {
            mode,
            pending: Vec::new(),
            disposed: false,
        }
    }

    pub fn mode(&self) -> DebounceMode {
        self.mode
    }

    pub fn schedule(&mut self, key: K, action: A, delay: Duration) -> bool {
        self.schedule_at(key, action, delay, Instant::now())
    }

    /// Replace any pending action this one supersedes and start a fresh
    /// window ending at `now + delay`. Returns `false` after `dispose`.
    pub fn schedule_at(&mut self, key: K, action: A, delay: Duration, now: Instant) -> bool {
        if self.disposed {
            return false;
        }

        match self.mode {
            DebounceMode::Shared => self.pending.clear(),
            DebounceMode::Keyed => self.pending.retain(|p| p.key != key),
        }
        self.pending.push(Pending {
            key,
            action,
            deadline: now + delay,
        });
        true
    }

    /// Drop the pending action for `key`, if any
    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| &p.key != key);
        self.pending.len() != before
    }

    /// Remove and return every action whose window has elapsed, earliest
    /// deadline first.
    pub fn take_ready(&mut self, now: Instant) -> Vec<(K, A)> {
        let (mut ready, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.deadline <= now);
        self.pending = waiting;

        ready.sort_by_key(|p| p.deadline);
        ready.into_iter().map(|p| (p.key, p.action)).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.deadline).min()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Drop all pending actions without running them. Idempotent.
    pub fn dispose(&mut self) {
        self.pending.clear();
        self.disposed = true;
    }
}

impl<K: PartialEq, A: FnOnce()> Debouncer<K, A> {
    /// Run every settled action. Returns how many ran.
    pub fn run_ready(&mut self, now: Instant) -> usize {
        let ready = self.take_ready(now);
        let count = ready.len();
        for (_, action) in ready {
            action();
        }
        count
    }
}
