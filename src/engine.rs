use anyhow::Result;

use crate::guarantee::{GuaranteeRecord, GuaranteeTracker, PendingGuarantee};
use crate::history::{HistoryStore, Order};
use crate::outcome::Outcome;
use crate::patterns::{self, PatternMatch};
use crate::scoring::{self, Suggestion};
use crate::stats::{self, Statistics};
use crate::tunables::Tunables;

/// What one recorded round hands back to the caller: the fresh suggestion
/// and, when a previous round's prediction was outstanding, its verdict.
#[derive(Debug, Clone)]
pub struct RoundUpdate {
    pub suggestion: Suggestion,
    pub guarantee: Option<GuaranteeRecord>,
}

/// One analysis session. Owns the history log and the guarantee tracker;
/// everything else (streaks, matches, scores, the current suggestion) is
/// recomputed from the log on every mutation. One instance per table or
/// user session; mutating calls must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct Engine {
    tunables: Tunables,
    history: HistoryStore,
    tracker: GuaranteeTracker,
    current: Suggestion,
    last_matches: Vec<PatternMatch>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Tunables::default())
    }
}

impl Engine {
    pub fn new(tunables: Tunables) -> Self {
        let history = HistoryStore::new(tunables.capacity);
        Self {
            tunables,
            history,
            tracker: GuaranteeTracker::new(),
            current: Suggestion::none(),
            last_matches: Vec::new(),
        }
    }

    /// Rebuilds a session from a chronological outcome sequence, replaying
    /// it through the store without creating guarantee records along the way.
    pub fn from_outcomes<I: IntoIterator<Item = Outcome>>(tunables: Tunables, outcomes: I) -> Self {
        let mut engine = Self::new(tunables);
        for outcome in outcomes {
            engine.history.append(outcome);
        }
        engine.refresh();
        engine
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Records one live round and runs the full pipeline: append, resolve
    /// any pending guarantee against the new outcome, rescan and rescore,
    /// then possibly arm a new pending snapshot off the fresh suggestion.
    pub fn record_outcome(&mut self, outcome: Outcome) -> RoundUpdate {
        self.history.append(outcome);
        let guarantee = self.tracker.resolve(outcome);
        self.refresh();
        self.tracker
            .observe(&self.current, self.tunables.guarantee_threshold);
        RoundUpdate {
            suggestion: self.current.clone(),
            guarantee,
        }
    }

    /// Symbol-level entry point. An invalid symbol fails here, before any
    /// state is touched.
    pub fn record_symbol(&mut self, raw: &str) -> Result<RoundUpdate> {
        let outcome = Outcome::from_symbol(raw)?;
        Ok(self.record_outcome(outcome))
    }

    /// Outcomes in the requested order, newest-limited when `limit` is set.
    pub fn get_history(&self, limit: Option<usize>, order: Order) -> Vec<Outcome> {
        self.history.outcomes(limit, order)
    }

    /// Aggregates over the last `window` rounds (full retained history
    /// when `None`). Total on empty history: zero counts, no streak.
    pub fn get_statistics(&self, window: Option<usize>) -> Statistics {
        stats::compute(&self.history.snapshot(window))
    }

    /// The current suggestion. Idempotent; mutating nothing, it returns
    /// bit-identical values until the next history change.
    pub fn get_current_suggestion(&self) -> Suggestion {
        self.current.clone()
    }

    /// Every pattern match from the latest scan, diagnostics included.
    pub fn get_pattern_matches(&self) -> &[PatternMatch] {
        &self.last_matches
    }

    pub fn pending_guarantee(&self) -> Option<&PendingGuarantee> {
        self.tracker.pending()
    }

    /// Restores a persisted pending snapshot (session reload only).
    pub fn restore_pending(&mut self, pending: Option<PendingGuarantee>) {
        self.tracker.restore(pending);
    }

    /// Empties the log and returns the tracker to Idle. No guarantee is
    /// resolved; the session simply starts over.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.tracker.reset();
        self.refresh();
    }

    /// Drops the most recent round as a correction. Derived state is
    /// recomputed, but no guarantee resolves and none is armed: a pending
    /// snapshot stays pending for the next real round.
    pub fn undo_last(&mut self) -> Option<Outcome> {
        let undone = self.history.undo_last()?;
        self.refresh();
        Some(undone)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn refresh(&mut self) {
        let window = self.history.snapshot(Some(self.tunables.window));
        self.last_matches = patterns::scan(&window, &self.tunables);
        let mut statistics = stats::compute(&window);
        // Record streaks live in the whole retained log, not just the
        // analysis window: a current run only "ties its record" against
        // everything still in history.
        let full = self.history.snapshot(None);
        statistics.max_streaks = [
            stats::max_streak(&full, Outcome::Home),
            stats::max_streak(&full, Outcome::Away),
            stats::max_streak(&full, Outcome::Draw),
        ];
        let board = scoring::score(&window, &self.last_matches, &statistics, &self.tunables);
        self.current = scoring::arbitrate(&board, self.history.len(), &self.tunables);
    }
}
