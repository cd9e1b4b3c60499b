use std::path::PathBuf;
use std::{env, fs};

use anyhow::{Context, Result};
use rayon::prelude::*;

use studio_engine::fake_feed::{FakeFeed, FeedConfig};
use studio_engine::outcome::Outcome;
use studio_engine::tunables::Tunables;
use studio_engine::Engine;

const DEFAULT_SEEDS: u64 = 32;
const DEFAULT_ROUNDS: usize = 500;

#[derive(Debug, Default, Clone, Copy)]
struct Report {
    rounds: usize,
    suggestions: usize,
    suggestion_hits: usize,
    guarantees: usize,
    guarantee_hits: usize,
}

impl Report {
    fn merge(mut self, other: Report) -> Report {
        self.rounds += other.rounds;
        self.suggestions += other.suggestions;
        self.suggestion_hits += other.suggestion_hits;
        self.guarantees += other.guarantees;
        self.guarantee_hits += other.guarantee_hits;
        self
    }
}

/// Replays a stream through a fresh engine and scores every prediction
/// against the outcome that actually followed it.
fn replay(tunables: &Tunables, stream: &[Outcome]) -> Report {
    let mut engine = Engine::new(tunables.clone());
    let mut report = Report::default();
    for &outcome in stream {
        let current = engine.get_current_suggestion();
        if let Some(predicted) = current.outcome {
            report.suggestions += 1;
            if predicted == outcome {
                report.suggestion_hits += 1;
            }
        }
        let update = engine.record_outcome(outcome);
        if let Some(record) = update.guarantee {
            report.guarantees += 1;
            if record.success {
                report.guarantee_hits += 1;
            }
        }
        report.rounds += 1;
    }
    report
}

fn parse_stream(raw: &str) -> Result<Vec<Outcome>> {
    raw.split_whitespace()
        .flat_map(|chunk| chunk.chars())
        .map(|ch| Outcome::from_symbol(ch.encode_utf8(&mut [0u8; 4])))
        .collect()
}

fn pct(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64 * 100.0
    }
}

/// Backtests the engine either against a recorded symbol file (first
/// argument) or across simulated seeded streams. The engine is a rule
/// evaluator, not a model, so the point is regression tracking of the
/// hit-rates, not calibration.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let tunables = Tunables::from_env();

    let report = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading stream {}", path.display()))?;
            let stream = parse_stream(&raw)?;
            println!("Replaying {} recorded rounds from {}", stream.len(), path.display());
            replay(&tunables, &stream)
        }
        None => {
            let seeds = env::var("BACKTEST_SEEDS")
                .ok()
                .and_then(|val| val.parse::<u64>().ok())
                .unwrap_or(DEFAULT_SEEDS)
                .max(1);
            let rounds = env::var("BACKTEST_ROUNDS")
                .ok()
                .and_then(|val| val.parse::<usize>().ok())
                .unwrap_or(DEFAULT_ROUNDS)
                .max(1);
            let feed_config = FeedConfig::from_env();
            println!("Simulating {seeds} seeds x {rounds} rounds");
            (0..seeds)
                .into_par_iter()
                .map(|seed| {
                    let stream = FakeFeed::seeded(seed, feed_config).take_rounds(rounds);
                    replay(&tunables, &stream)
                })
                .reduce(Report::default, Report::merge)
        }
    };

    println!("Rounds:          {}", report.rounds);
    println!(
        "Suggestions:     {} ({:.1}% of rounds), hit {:.1}%",
        report.suggestions,
        pct(report.suggestions, report.rounds),
        pct(report.suggestion_hits, report.suggestions)
    );
    println!(
        "Guarantees:      {} ({:.1}% of rounds), hit {:.1}%",
        report.guarantees,
        pct(report.guarantees, report.rounds),
        pct(report.guarantee_hits, report.guarantees)
    );
    Ok(())
}
