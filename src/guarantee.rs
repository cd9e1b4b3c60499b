use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;
use crate::scoring::Suggestion;

/// Snapshot of a high-confidence suggestion awaiting the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingGuarantee {
    pub predicted: Outcome,
    pub confidence: u8,
    pub evidence: Vec<String>,
}

/// The resolved form of a pending guarantee: what was predicted, what
/// actually happened, and whether they agree. Surfaced exactly once, on
/// the round that resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuaranteeRecord {
    pub predicted: Outcome,
    pub confidence: u8,
    pub evidence: Vec<String>,
    pub actual: Outcome,
    pub success: bool,
}

/// Two-state machine: Idle (nothing tracked) or Pending (one stored
/// snapshot). `resolve` runs on every new round before rescanning;
/// `observe` may re-arm straight away off the fresh suggestion, so
/// Pending -> Idle -> Pending within one update is normal. Undo and clear
/// never resolve: neither is a round.
#[derive(Debug, Clone, Default)]
pub struct GuaranteeTracker {
    pending: Option<PendingGuarantee>,
}

impl GuaranteeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&PendingGuarantee> {
        self.pending.as_ref()
    }

    /// Restores a persisted pending snapshot.
    pub fn restore(&mut self, pending: Option<PendingGuarantee>) {
        self.pending = pending;
    }

    /// Compares the stored prediction against the round that just landed,
    /// emitting the user-visible record and returning to Idle. No-op when
    /// nothing is pending.
    pub fn resolve(&mut self, actual: Outcome) -> Option<GuaranteeRecord> {
        let pending = self.pending.take()?;
        Some(GuaranteeRecord {
            success: pending.predicted == actual,
            predicted: pending.predicted,
            confidence: pending.confidence,
            evidence: pending.evidence,
            actual,
        })
    }

    /// Arms Pending when the freshly computed suggestion clears the
    /// confidence threshold. Below threshold (or the sentinel) leaves the
    /// state untouched.
    pub fn observe(&mut self, suggestion: &Suggestion, threshold: u8) {
        let Some(predicted) = suggestion.outcome else {
            return;
        };
        if suggestion.confidence <= threshold {
            return;
        }
        self.pending = Some(PendingGuarantee {
            predicted,
            confidence: suggestion.confidence,
            evidence: suggestion.evidence.clone(),
        });
    }

    pub fn reset(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome::{Away, Home};

    fn confident(outcome: Outcome, confidence: u8) -> Suggestion {
        Suggestion {
            outcome: Some(outcome),
            confidence,
            evidence: vec!["test".to_string()],
        }
    }

    #[test]
    fn arms_only_above_the_threshold() {
        let mut t = GuaranteeTracker::new();
        t.observe(&confident(Home, 70), 70);
        assert!(t.pending().is_none());
        t.observe(&confident(Home, 71), 70);
        assert_eq!(t.pending().unwrap().predicted, Home);
    }

    #[test]
    fn sentinel_never_arms() {
        let mut t = GuaranteeTracker::new();
        t.observe(&Suggestion::none(), 0);
        assert!(t.pending().is_none());
    }

    #[test]
    fn resolution_reports_a_miss_and_returns_to_idle() {
        let mut t = GuaranteeTracker::new();
        t.observe(&confident(Away, 85), 70);
        let record = t.resolve(Home).expect("pending should resolve");
        assert_eq!(record.predicted, Away);
        assert_eq!(record.actual, Home);
        assert!(!record.success);
        assert_eq!(record.confidence, 85);
        assert!(t.pending().is_none());
        assert!(t.resolve(Home).is_none());
    }

    #[test]
    fn resolution_reports_a_hit() {
        let mut t = GuaranteeTracker::new();
        t.observe(&confident(Home, 90), 70);
        let record = t.resolve(Home).unwrap();
        assert!(record.success);
    }

    #[test]
    fn reset_discards_the_snapshot_silently() {
        let mut t = GuaranteeTracker::new();
        t.observe(&confident(Home, 90), 70);
        t.reset();
        assert!(t.resolve(Home).is_none());
    }
}
