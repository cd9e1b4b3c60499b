use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// One recorded round. `seq` is a global round counter, so it keeps
/// increasing across evictions and identifies the round even after older
/// entries have aged out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub outcome: Outcome,
    pub seq: u64,
}

/// Requested ordering for history reads. Internally everything is stored
/// and analyzed chronologically (oldest first); `Reverse` only affects the
/// returned view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Chronological,
    Reverse,
}

/// Bounded, append-only log of outcomes. The single source of truth:
/// streaks, pattern matches, scores and suggestions are all recomputed
/// from this on every mutation.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    next_seq: u64,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            next_seq: 0,
        }
    }

    /// Pushes a round to the end of the log, evicting the oldest entry once
    /// capacity is exceeded. Returns the evicted outcome, if any.
    pub fn append(&mut self, outcome: Outcome) -> Option<Outcome> {
        let entry = HistoryEntry {
            outcome,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front().map(|e| e.outcome)
        } else {
            None
        }
    }

    /// Removes the most recently appended entry. This is a correction to
    /// the log, not a new round: callers must not run guarantee resolution
    /// off the back of it.
    pub fn undo_last(&mut self) -> Option<Outcome> {
        self.entries.pop_back().map(|e| e.outcome)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Chronological copy of the last `window` outcomes (entire log when
    /// `None`). A copy, never a mutable view; windows are a few dozen
    /// entries so this stays cheap.
    pub fn snapshot(&self, window: Option<usize>) -> Vec<Outcome> {
        let take = window.unwrap_or(self.entries.len()).min(self.entries.len());
        let skip = self.entries.len() - take;
        self.entries.iter().skip(skip).map(|e| e.outcome).collect()
    }

    /// Outcomes in the requested order, optionally truncated to the most
    /// recent `limit` rounds.
    pub fn outcomes(&self, limit: Option<usize>, order: Order) -> Vec<Outcome> {
        let mut out = self.snapshot(limit);
        if order == Order::Reverse {
            out.reverse();
        }
        out
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
