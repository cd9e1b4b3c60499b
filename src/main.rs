use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use studio_engine::history::Order;
use studio_engine::outcome::Outcome;
use studio_engine::scoring::Suggestion;
use studio_engine::tunables::Tunables;
use studio_engine::{Engine, persist};

/// Thin line-oriented front end over the engine: one symbol per line,
/// plus a few session commands. All analysis lives behind the library
/// API; this binary only renders what it returns.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let tunables = Tunables::from_env();

    let session_path = env::var("STUDIO_SESSION").ok().map(PathBuf::from);
    let mut engine = session_path
        .as_deref()
        .and_then(|path| persist::load(tunables.clone(), path))
        .unwrap_or_else(|| Engine::new(tunables));

    if engine.history_len() > 0 {
        println!("Resumed session with {} rounds.", engine.history_len());
    }
    println!("Enter H/A/D per round (C/V/E also accepted).");
    println!("Commands: undo, clear, stats, patterns, quit.");

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        print!("> ");
        out.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "undo" => match engine.undo_last() {
                Some(outcome) => {
                    println!("Removed {outcome}.");
                    print_suggestion(&engine.get_current_suggestion());
                }
                None => println!("Nothing to undo."),
            },
            "clear" => {
                engine.clear_history();
                println!("Session cleared.");
            }
            "stats" => print_stats(&engine),
            "patterns" => {
                let matches = engine.get_pattern_matches();
                if matches.is_empty() {
                    println!("No patterns in the current window.");
                }
                for m in matches {
                    println!("  {:<22} {}", m.name, m.detail);
                }
            }
            _ => match engine.record_symbol(input) {
                Ok(update) => {
                    if let Some(record) = update.guarantee {
                        let verdict = if record.success { "HIT" } else { "MISS" };
                        println!(
                            "Guarantee {verdict}: predicted {} at {}%, got {}.",
                            record.predicted, record.confidence, record.actual
                        );
                    }
                    print_history(&engine);
                    print_suggestion(&update.suggestion);
                }
                Err(err) => println!("{err}"),
            },
        }
    }

    if let Some(path) = session_path.as_deref() {
        persist::save(&engine, path)?;
        println!("Session saved to {}.", path.display());
    }
    Ok(())
}

/// History rendered in rows of 9, oldest first, like the table displays.
fn print_history(engine: &Engine) {
    let outcomes = engine.get_history(None, Order::Chronological);
    for row in outcomes.chunks(9) {
        let line: Vec<String> = row.iter().map(|o| format!("[{}]", o.symbol())).collect();
        println!("{}", line.join(" "));
    }
}

fn print_suggestion(suggestion: &Suggestion) {
    match suggestion.outcome {
        Some(outcome) => {
            println!("Suggestion: {outcome} ({}%)", suggestion.confidence);
            for reason in &suggestion.evidence {
                println!("  - {reason}");
            }
        }
        None => println!("No suggestion yet."),
    }
}

fn print_stats(engine: &Engine) {
    let stats = engine.get_statistics(None);
    if stats.total == 0 {
        println!("No rounds recorded.");
        return;
    }
    for outcome in Outcome::ALL {
        let i = outcome.index();
        println!(
            "{:<5} {:>3}  ({:>5.1}%)  max streak {}",
            outcome.label(),
            stats.counts[i],
            stats.frequencies[i] * 100.0,
            stats.max_streaks[i]
        );
    }
    if let (Some(outcome), len) = (stats.current_streak.outcome, stats.current_streak.length) {
        println!("Current streak: {outcome} x{len}");
    }
    match stats.rounds_since_draw {
        Some(n) => println!("Rounds since draw: {n}"),
        None => println!("No draw in retained history."),
    }
}
