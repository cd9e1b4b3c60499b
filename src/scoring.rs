use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;
use crate::patterns::PatternMatch;
use crate::stats::Statistics;
use crate::tunables::Tunables;

/// Per-outcome accumulated weight plus the reasons behind it, indexed by
/// `Outcome::index()`.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    pub scores: [f64; 3],
    pub evidence: [Vec<String>; 3],
}

impl ScoreBoard {
    fn add(&mut self, outcome: Outcome, weight: f64, reason: String) {
        self.scores[outcome.index()] += weight;
        self.evidence[outcome.index()].push(reason);
    }
}

/// The arbitrated result of one analysis pass. A fresh value on every
/// history mutation; superseded, never edited. `outcome: None` with
/// confidence 0 is the explicit "no suggestion" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub outcome: Option<Outcome>,
    pub confidence: u8,
    pub evidence: Vec<String>,
}

impl Suggestion {
    pub fn none() -> Self {
        Self {
            outcome: None,
            confidence: 0,
            evidence: Vec::new(),
        }
    }
}

/// Folds pattern matches and the three standalone heuristics into a
/// score board. Matches with no implied outcome contribute nothing here;
/// they stay visible through the engine's match listing.
pub fn score(
    window: &[Outcome],
    matches: &[PatternMatch],
    stats: &Statistics,
    tun: &Tunables,
) -> ScoreBoard {
    let mut board = ScoreBoard::default();

    for m in matches {
        let Some(implied) = m.implied else {
            continue;
        };
        board.add(implied, m.weight, format!("{}: {}", m.name, m.detail));
    }

    apply_streak_exhaustion(&mut board, stats, tun);
    apply_draw_drought(&mut board, stats, tun);
    apply_general_reversal(&mut board, window, tun);

    board
}

/// A record-tying run of >= 3 argues for reversal: boost both other
/// outcomes. Skipped per outcome once a pattern signal already carries it
/// past the bonus, so an established reversal read is not double-counted.
fn apply_streak_exhaustion(board: &mut ScoreBoard, stats: &Statistics, tun: &Tunables) {
    let Some(current) = stats.current_streak.outcome else {
        return;
    };
    let len = stats.current_streak.length;
    if len < 3 || len < stats.max_streaks[current.index()] {
        return;
    }
    for other in Outcome::ALL {
        if other == current {
            continue;
        }
        if board.scores[other.index()] >= tun.streak_exhaustion_bonus {
            continue;
        }
        board.add(
            other,
            tun.streak_exhaustion_bonus,
            format!("streak_exhaustion: {current} run x{len} ties its record"),
        );
    }
}

/// Long stretch without a Draw while the window's draw frequency is low:
/// boost Draw. The frequency guard keeps the bonus off draw-heavy tables
/// that merely paused.
fn apply_draw_drought(board: &mut ScoreBoard, stats: &Statistics, tun: &Tunables) {
    if stats.total == 0 {
        return;
    }
    let since = stats.rounds_since_draw.unwrap_or(stats.total);
    if since < tun.draw_drought_rounds {
        return;
    }
    if stats.frequencies[Outcome::Draw.index()] >= tun.draw_drought_freq {
        return;
    }
    if board.scores[Outcome::Draw.index()] >= tun.draw_drought_bonus {
        return;
    }
    board.add(
        Outcome::Draw,
        tun.draw_drought_bonus,
        format!("draw_drought: {since} rounds without a draw"),
    );
}

/// Choppy window (high fraction of adjacent-pair flips): lean toward the
/// opposite of the latest outcome. Only applied while that outcome's score
/// is still below the bonus, so an already-strong signal is not inflated.
fn apply_general_reversal(board: &mut ScoreBoard, window: &[Outcome], tun: &Tunables) {
    if window.len() < 2 {
        return;
    }
    let Some(target) = window.last().and_then(|o| o.opposite()) else {
        return;
    };
    let breaks = window.windows(2).filter(|p| p[0] != p[1]).count();
    let fraction = breaks as f64 / (window.len() - 1) as f64;
    if fraction <= tun.reversal_break_fraction {
        return;
    }
    if board.scores[target.index()] >= tun.reversal_bonus {
        return;
    }
    board.add(
        target,
        tun.reversal_bonus,
        format!(
            "general_reversal: {:.0}% of adjacent pairs flip",
            fraction * 100.0
        ),
    );
}

/// Picks the winning outcome from the board. Ties break by the fixed
/// preference order Home, Away, Draw. Zero score or a history still below
/// the minimum yields the sentinel. Confidence is the winning score capped
/// at 100; evidence is the winner's reasons, deduplicated and sorted.
pub fn arbitrate(board: &ScoreBoard, history_len: usize, tun: &Tunables) -> Suggestion {
    if history_len < tun.min_history {
        return Suggestion::none();
    }
    let mut winner = Outcome::Home;
    for candidate in Outcome::ALL {
        if board.scores[candidate.index()] > board.scores[winner.index()] {
            winner = candidate;
        }
    }
    let score = board.scores[winner.index()];
    if score <= 0.0 {
        return Suggestion::none();
    }
    let mut evidence = board.evidence[winner.index()].clone();
    evidence.sort();
    evidence.dedup();
    Suggestion {
        outcome: Some(winner),
        confidence: score.round().min(100.0) as u8,
        evidence,
    }
}
