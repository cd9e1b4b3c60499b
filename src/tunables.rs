use std::env;

use serde::{Deserialize, Serialize};

/// Every weight and threshold the pipeline uses, in one place.
///
/// The source material for these numbers disagreed with itself across
/// variants, so none of them is treated as calibrated truth: each default
/// can be overridden through a `STUDIO_*` environment variable and the
/// whole set travels with the engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tunables {
    /// Retained history entries before the oldest round is evicted.
    pub capacity: usize,
    /// Analysis window: suffix of history the scanner and scorer look at.
    pub window: usize,
    /// Below this many recorded rounds the arbiter stays silent.
    pub min_history: usize,
    /// Confidence needed before a suggestion is tracked as a guarantee.
    pub guarantee_threshold: u8,

    // Pattern base weights.
    pub run_base_weight: f64,
    /// Extra weight per run entry beyond the 3-length minimum.
    pub run_length_weight: f64,
    pub alternation_weight: f64,
    pub wave_weight: f64,
    pub mirror_weight: f64,
    pub sandwich_weight: f64,
    pub block_reversal_weight: f64,
    pub draw_recurrence_weight: f64,
    pub draw_center_weight: f64,
    /// Base weight when the latest 5-round sequence recurred earlier.
    pub recurrence_weight: f64,

    // Heuristic layer.
    pub streak_exhaustion_bonus: f64,
    pub draw_drought_bonus: f64,
    /// Rounds without a draw before the drought bonus arms.
    pub draw_drought_rounds: usize,
    /// Drought bonus also requires window draw frequency below this.
    pub draw_drought_freq: f64,
    pub reversal_bonus: f64,
    /// Fraction of adjacent-pair mismatches that marks a choppy window.
    pub reversal_break_fraction: f64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            capacity: 300,
            window: 27,
            min_history: 9,
            guarantee_threshold: 70,
            run_base_weight: 30.0,
            run_length_weight: 8.0,
            alternation_weight: 28.0,
            wave_weight: 12.0,
            mirror_weight: 18.0,
            sandwich_weight: 22.0,
            block_reversal_weight: 25.0,
            draw_recurrence_weight: 15.0,
            draw_center_weight: 12.0,
            recurrence_weight: 20.0,
            streak_exhaustion_bonus: 35.0,
            draw_drought_bonus: 20.0,
            draw_drought_rounds: 7,
            draw_drought_freq: 0.15,
            reversal_bonus: 18.0,
            reversal_break_fraction: 0.6,
        }
    }
}

impl Tunables {
    /// Defaults with `STUDIO_*` environment overrides applied on top.
    pub fn from_env() -> Self {
        let mut t = Self::default();
        t.capacity = env_usize("STUDIO_CAPACITY", t.capacity).max(1);
        t.window = env_usize("STUDIO_WINDOW", t.window).clamp(4, t.capacity);
        t.min_history = env_usize("STUDIO_MIN_HISTORY", t.min_history);
        t.guarantee_threshold =
            env_usize("STUDIO_GUARANTEE_THRESHOLD", t.guarantee_threshold as usize).min(100) as u8;
        t.run_base_weight = env_f64("STUDIO_RUN_WEIGHT", t.run_base_weight);
        t.run_length_weight = env_f64("STUDIO_RUN_LENGTH_WEIGHT", t.run_length_weight);
        t.alternation_weight = env_f64("STUDIO_ALTERNATION_WEIGHT", t.alternation_weight);
        t.wave_weight = env_f64("STUDIO_WAVE_WEIGHT", t.wave_weight);
        t.mirror_weight = env_f64("STUDIO_MIRROR_WEIGHT", t.mirror_weight);
        t.sandwich_weight = env_f64("STUDIO_SANDWICH_WEIGHT", t.sandwich_weight);
        t.block_reversal_weight = env_f64("STUDIO_BLOCK_WEIGHT", t.block_reversal_weight);
        t.draw_recurrence_weight =
            env_f64("STUDIO_DRAW_RECURRENCE_WEIGHT", t.draw_recurrence_weight);
        t.draw_center_weight = env_f64("STUDIO_DRAW_CENTER_WEIGHT", t.draw_center_weight);
        t.recurrence_weight = env_f64("STUDIO_RECURRENCE_WEIGHT", t.recurrence_weight);
        t.streak_exhaustion_bonus = env_f64("STUDIO_EXHAUSTION_BONUS", t.streak_exhaustion_bonus);
        t.draw_drought_bonus = env_f64("STUDIO_DROUGHT_BONUS", t.draw_drought_bonus);
        t.draw_drought_rounds = env_usize("STUDIO_DROUGHT_ROUNDS", t.draw_drought_rounds);
        t.draw_drought_freq = env_f64("STUDIO_DROUGHT_FREQ", t.draw_drought_freq);
        t.reversal_bonus = env_f64("STUDIO_REVERSAL_BONUS", t.reversal_bonus);
        t.reversal_break_fraction =
            env_f64("STUDIO_REVERSAL_BREAKS", t.reversal_break_fraction).clamp(0.0, 1.0);
        t
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|val| val.parse::<f64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::Tunables;

    #[test]
    fn defaults_are_internally_consistent() {
        let t = Tunables::default();
        assert!(t.window <= t.capacity);
        assert!(t.min_history < t.window);
        assert!(t.guarantee_threshold <= 100);
        assert!(t.reversal_break_fraction > 0.0 && t.reversal_break_fraction <= 1.0);
    }
}
