use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// The run touching the end of the window: its outcome and length.
/// `outcome` is `None` only on an empty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    pub outcome: Option<Outcome>,
    pub length: usize,
}

/// Aggregate view of a window, as served by `Engine::get_statistics`.
/// Arrays are indexed by `Outcome::index()` (Home, Away, Draw).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub counts: [usize; 3],
    pub frequencies: [f64; 3],
    pub current_streak: StreakInfo,
    pub max_streaks: [usize; 3],
    /// Rounds since the last Draw; `None` when the window holds no Draw.
    pub rounds_since_draw: Option<usize>,
}

/// Length and outcome of the run ending at the newest entry.
pub fn current_streak(window: &[Outcome]) -> StreakInfo {
    let Some(&last) = window.last() else {
        return StreakInfo {
            outcome: None,
            length: 0,
        };
    };
    let length = window.iter().rev().take_while(|&&o| o == last).count();
    StreakInfo {
        outcome: Some(last),
        length,
    }
}

/// Longest run of `outcome` anywhere in the window. A full forward pass on
/// every call: windows are small, and recomputing sidesteps the stale-max
/// question after the oldest entries age out of the log.
pub fn max_streak(window: &[Outcome], outcome: Outcome) -> usize {
    let mut best = 0usize;
    let mut run = 0usize;
    for &o in window {
        if o == outcome {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// Rounds played since the most recent Draw (0 = the latest round was a
/// Draw). `None` when the window holds no Draw at all.
pub fn rounds_since_draw(window: &[Outcome]) -> Option<usize> {
    window.iter().rev().position(|&o| o == Outcome::Draw)
}

pub fn compute(window: &[Outcome]) -> Statistics {
    let total = window.len();
    let mut counts = [0usize; 3];
    for &o in window {
        counts[o.index()] += 1;
    }
    let mut frequencies = [0.0f64; 3];
    if total > 0 {
        for i in 0..3 {
            frequencies[i] = counts[i] as f64 / total as f64;
        }
    }
    let max_streaks = [
        max_streak(window, Outcome::Home),
        max_streak(window, Outcome::Away),
        max_streak(window, Outcome::Draw),
    ];
    Statistics {
        total,
        counts,
        frequencies,
        current_streak: current_streak(window),
        max_streaks,
        rounds_since_draw: rounds_since_draw(window),
    }
}
