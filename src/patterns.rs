use once_cell::sync::Lazy;
use serde::Serialize;

use crate::outcome::Outcome;
use crate::tunables::Tunables;

/// A single detection over the analysis window. `start`/`len` are
/// window-relative (chronological, oldest first) and always satisfy
/// `start + len <= window.len()`. `implied` is the outcome the pattern
/// argues for next, or `None` for purely diagnostic matches. `detail` is
/// the human-readable reason carried into suggestion evidence; structured
/// facts live in the fields, never get re-parsed out of the string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternMatch {
    pub name: &'static str,
    pub start: usize,
    pub len: usize,
    pub implied: Option<Outcome>,
    pub weight: f64,
    pub detail: String,
}

type DetectFn = fn(&[Outcome], &Tunables) -> Vec<PatternMatch>;

/// One catalog row: the detector plus the shortest window it can fire on.
/// Windows shorter than `min_len` are skipped outright, so detectors can
/// index the tail without re-checking bounds for their base shape.
pub struct PatternDef {
    pub name: &'static str,
    pub min_len: usize,
    detect: DetectFn,
}

static CATALOG: Lazy<Vec<PatternDef>> = Lazy::new(|| {
    vec![
        PatternDef {
            name: "run",
            min_len: 3,
            detect: detect_run,
        },
        PatternDef {
            name: "break_of_run",
            min_len: 4,
            detect: detect_break_of_run,
        },
        PatternDef {
            name: "alternation",
            min_len: 4,
            detect: detect_alternation,
        },
        PatternDef {
            name: "break_of_alternation",
            min_len: 4,
            detect: detect_break_of_alternation,
        },
        PatternDef {
            name: "repeated_pair",
            min_len: 4,
            detect: detect_repeated_pair,
        },
        PatternDef {
            name: "mirror",
            min_len: 3,
            detect: detect_mirror,
        },
        PatternDef {
            name: "ladder",
            min_len: 6,
            detect: detect_ladder,
        },
        PatternDef {
            name: "wave",
            min_len: 4,
            detect: detect_wave,
        },
        PatternDef {
            name: "draw_recurrence",
            min_len: 3,
            detect: detect_draw_recurrence,
        },
        PatternDef {
            name: "draw_center",
            min_len: 3,
            detect: detect_draw_center,
        },
        PatternDef {
            name: "block_reversal",
            min_len: 4,
            detect: detect_block_reversal,
        },
        PatternDef {
            name: "sandwich",
            min_len: 5,
            detect: detect_sandwich,
        },
        PatternDef {
            name: "recent_frequency",
            min_len: 5,
            detect: detect_recent_frequency,
        },
        PatternDef {
            name: "recurrence",
            min_len: 6,
            detect: detect_recurrence,
        },
    ]
});

/// The full declarative catalog, mostly useful for listings and tests.
pub fn catalog() -> &'static [PatternDef] {
    &CATALOG
}

/// Runs every catalog entry once over the window and collects all matches.
/// Total over any window: too-short windows simply contribute nothing.
pub fn scan(window: &[Outcome], tun: &Tunables) -> Vec<PatternMatch> {
    let mut matches = Vec::new();
    for def in CATALOG.iter() {
        if window.len() < def.min_len {
            continue;
        }
        matches.extend((def.detect)(window, tun));
    }
    debug_assert!(matches.iter().all(|m| m.start + m.len <= window.len()));
    matches
}

/// Maximal suffix run of >= 3 identical outcomes. Argues for continuation;
/// the scorer's streak-exhaustion heuristic is what flips a record-tying
/// run into a reversal signal.
fn detect_run(w: &[Outcome], tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    let last = w[n - 1];
    let k = w.iter().rev().take_while(|&&o| o == last).count();
    if k < 3 {
        return Vec::new();
    }
    vec![PatternMatch {
        name: "run",
        start: n - k,
        len: k,
        implied: Some(last),
        weight: tun.run_base_weight + (k as f64 - 3.0) * tun.run_length_weight,
        detail: format!("{last} surf x{k} ending the window"),
    }]
}

/// A run of exactly k >= 3 that was just broken by a different outcome.
/// Diagnostic only: it records that the table turned.
fn detect_break_of_run(w: &[Outcome], _tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    let last = w[n - 1];
    let prev = w[n - 2];
    if last == prev {
        return Vec::new();
    }
    let k = w[..n - 1].iter().rev().take_while(|&&o| o == prev).count();
    if k < 3 {
        return Vec::new();
    }
    vec![PatternMatch {
        name: "break_of_run",
        start: n - 1 - k,
        len: k + 1,
        implied: None,
        weight: 0.0,
        detail: format!("{prev} surf x{k} broken by {last}"),
    }]
}

/// Length of the maximal suffix in which every adjacent pair differs.
fn alternating_suffix_len(w: &[Outcome]) -> usize {
    let n = w.len();
    if n == 0 {
        return 0;
    }
    let mut len = 1;
    while len < n && w[n - len - 1] != w[n - len] {
        len += 1;
    }
    len
}

/// Strict zig-zag of >= 4: every adjacent pair differs. Implies the
/// outcome two positions back, continuing the alternation.
fn detect_alternation(w: &[Outcome], tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    let len = alternating_suffix_len(w);
    if len < 4 {
        return Vec::new();
    }
    let implied = w[n - 2];
    vec![PatternMatch {
        name: "alternation",
        start: n - len,
        len,
        implied: Some(implied),
        weight: tun.alternation_weight + (len as f64 - 4.0) * tun.run_length_weight,
        detail: format!("zig-zag x{len}, next in turn is {implied}"),
    }]
}

/// An alternating run of >= 3 that just collapsed into a repeat of the
/// preceding outcome. Diagnostic only.
fn detect_break_of_alternation(w: &[Outcome], _tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    if w[n - 1] != w[n - 2] {
        return Vec::new();
    }
    let alt = alternating_suffix_len(&w[..n - 1]);
    if alt < 3 {
        return Vec::new();
    }
    vec![PatternMatch {
        name: "break_of_alternation",
        start: n - 1 - alt,
        len: alt + 1,
        implied: None,
        weight: 0.0,
        detail: format!("zig-zag x{alt} broken by repeated {}", w[n - 1]),
    }]
}

/// AABB at the tail: two adjacent equal pairs of different outcomes.
/// Evidence only.
fn detect_repeated_pair(w: &[Outcome], _tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    let (a, b) = (w[n - 4], w[n - 2]);
    if w[n - 3] != a || w[n - 1] != b || a == b {
        return Vec::new();
    }
    vec![PatternMatch {
        name: "repeated_pair",
        start: n - 4,
        len: 4,
        implied: None,
        weight: 0.0,
        detail: format!("paired blocks {a}{a}-{b}{b}"),
    }]
}

/// Mirror family over the X,Y,Y cell:
/// - open tail X,Y,Y predicts X (closes the X,Y,Y,X mirror);
/// - complete tail X,Y,Y,X predicts Y (the mirror keeps cycling,
///   X,Y,Y,X,Y,Y,...).
fn detect_mirror(w: &[Outcome], tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    if n >= 4 {
        let (x, y) = (w[n - 4], w[n - 3]);
        if x != y && w[n - 2] == y && w[n - 1] == x {
            return vec![PatternMatch {
                name: "mirror",
                start: n - 4,
                len: 4,
                implied: Some(y),
                weight: tun.mirror_weight,
                detail: format!("closed mirror {x}-{y}-{y}-{x}, cycle continues with {y}"),
            }];
        }
    }
    let (x, y) = (w[n - 3], w[n - 2]);
    if x != y && w[n - 1] == y {
        return vec![PatternMatch {
            name: "mirror",
            start: n - 3,
            len: 3,
            implied: Some(x),
            weight: tun.mirror_weight,
            detail: format!("open mirror {x}-{y}-{y}, closes with {x}"),
        }];
    }
    Vec::new()
}

/// Run-length encoding of the window: (outcome, start, len) per maximal run.
fn runs(w: &[Outcome]) -> Vec<(Outcome, usize, usize)> {
    let mut out: Vec<(Outcome, usize, usize)> = Vec::new();
    for (i, &o) in w.iter().enumerate() {
        match out.last_mut() {
            Some((last, _, len)) if *last == o => *len += 1,
            _ => out.push((o, i, 1)),
        }
    }
    out
}

/// Three consecutive maximal runs of lengths 1,2,3 (or 3,2,1) ending the
/// window, with the outer runs sharing one outcome. Diagnostic only.
fn detect_ladder(w: &[Outcome], _tun: &Tunables) -> Vec<PatternMatch> {
    let rle = runs(w);
    if rle.len() < 3 {
        return Vec::new();
    }
    let tail = &rle[rle.len() - 3..];
    let lens = [tail[0].2, tail[1].2, tail[2].2];
    if (lens != [1, 2, 3] && lens != [3, 2, 1]) || tail[0].0 != tail[2].0 {
        return Vec::new();
    }
    vec![PatternMatch {
        name: "ladder",
        start: tail[0].1,
        len: 6,
        implied: None,
        weight: 0.0,
        detail: format!(
            "ladder {}-{}-{} of {} around {}",
            lens[0], lens[1], lens[2], tail[0].0, tail[1].0
        ),
    }]
}

/// Exact period-2 repetition over the last four entries: A,B,A,B with
/// A != B. Implies A. The unbounded-suffix variant is `alternation`; this
/// is the fixed 4-length template kept from the source catalog.
fn detect_wave(w: &[Outcome], tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    let (a, b) = (w[n - 4], w[n - 3]);
    if a == b || w[n - 2] != a || w[n - 1] != b {
        return Vec::new();
    }
    vec![PatternMatch {
        name: "wave",
        start: n - 4,
        len: 4,
        implied: Some(a),
        weight: tun.wave_weight,
        detail: format!("wave {a}-{b}-{a}-{b}, crest returns to {a}"),
    }]
}

/// The last two Draws landed 2..=4 rounds apart, which the catalog reads
/// as a recurring draw cadence. Boosts Draw.
fn detect_draw_recurrence(w: &[Outcome], tun: &Tunables) -> Vec<PatternMatch> {
    let mut draws = w
        .iter()
        .enumerate()
        .rev()
        .filter(|&(_, &o)| o == Outcome::Draw)
        .map(|(i, _)| i);
    let (Some(newest), Some(prior)) = (draws.next(), draws.next()) else {
        return Vec::new();
    };
    let gap = newest - prior;
    if !(2..=4).contains(&gap) {
        return Vec::new();
    }
    vec![PatternMatch {
        name: "draw_recurrence",
        start: prior,
        len: gap + 1,
        implied: Some(Outcome::Draw),
        weight: tun.draw_recurrence_weight,
        detail: format!("draws {gap} rounds apart"),
    }]
}

/// X, Draw, Y at the tail with X != Y and neither a Draw: a draw sitting
/// at an alternation midpoint. Boosts Draw.
fn detect_draw_center(w: &[Outcome], tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    let (x, mid, y) = (w[n - 3], w[n - 2], w[n - 1]);
    if mid != Outcome::Draw || x == y || x == Outcome::Draw || y == Outcome::Draw {
        return Vec::new();
    }
    vec![PatternMatch {
        name: "draw_center",
        start: n - 3,
        len: 3,
        implied: Some(Outcome::Draw),
        weight: tun.draw_center_weight,
        detail: format!("draw centered between {x} and {y}"),
    }]
}

/// Two adjacent internally-constant blocks of size k (k = 4 down to 2)
/// ending the window, of different outcomes: the 2x2 / 3x3 / 4x4 templates.
/// Implies reversal back to the first block's outcome. Only the largest
/// matching k fires.
fn detect_block_reversal(w: &[Outcome], tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    for k in (2..=4usize).rev() {
        if n < 2 * k {
            continue;
        }
        let first = &w[n - 2 * k..n - k];
        let second = &w[n - k..];
        let a = first[0];
        let b = second[0];
        if a == b || first.iter().any(|&o| o != a) || second.iter().any(|&o| o != b) {
            continue;
        }
        return vec![PatternMatch {
            name: "block_reversal",
            start: n - 2 * k,
            len: 2 * k,
            implied: Some(a),
            weight: tun.block_reversal_weight + (k as f64 - 2.0) * tun.run_length_weight,
            detail: format!("{k}x{k} blocks {a} then {b}, due back to {a}"),
        }];
    }
    Vec::new()
}

/// a^k b a^k at the tail (the 2x1x2 / 3x1x3 templates): a lone intruder
/// between two equal blocks. Implies the surrounding outcome continues.
/// Only the largest matching k fires. The asymmetric a,a,a,b,b,a,a form
/// (a wider intruder pinned by the opening run) counts too.
fn detect_sandwich(w: &[Outcome], tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    for k in (2..=3usize).rev() {
        let span = 2 * k + 1;
        if n < span {
            continue;
        }
        let tail = &w[n - span..];
        let a = tail[0];
        let b = tail[k];
        if a == b || tail[..k].iter().any(|&o| o != a) || tail[k + 1..].iter().any(|&o| o != a) {
            continue;
        }
        return vec![PatternMatch {
            name: "sandwich",
            start: n - span,
            len: span,
            implied: Some(a),
            weight: tun.sandwich_weight + (k as f64 - 2.0) * tun.run_length_weight,
            detail: format!("{k}x1x{k} sandwich, {b} squeezed by {a}"),
        }];
    }
    if n >= 7 {
        let tail = &w[n - 7..];
        let a = tail[0];
        let b = tail[3];
        if a != b
            && tail[..3].iter().all(|&o| o == a)
            && tail[3..5].iter().all(|&o| o == b)
            && tail[5..].iter().all(|&o| o == a)
        {
            return vec![PatternMatch {
                name: "sandwich",
                start: n - 7,
                len: 7,
                implied: Some(a),
                weight: tun.sandwich_weight + tun.run_length_weight,
                detail: format!("3x2x2 sandwich, {b} pair squeezed by {a}"),
            }];
        }
    }
    Vec::new()
}

/// Most frequent outcome over the last 5, 7 and 10 rounds, reported as
/// evidence only. Ties resolve by the fixed preference order.
fn detect_recent_frequency(w: &[Outcome], _tun: &Tunables) -> Vec<PatternMatch> {
    let n = w.len();
    let mut matches = Vec::new();
    for span in [5usize, 7, 10] {
        if n < span {
            continue;
        }
        let tail = &w[n - span..];
        let mut counts = [0usize; 3];
        for &o in tail {
            counts[o.index()] += 1;
        }
        let top = Outcome::ALL
            .into_iter()
            .max_by_key(|o| counts[o.index()])
            .unwrap_or(Outcome::Home);
        matches.push(PatternMatch {
            name: "recent_frequency",
            start: n - span,
            len: span,
            implied: None,
            weight: 0.0,
            detail: format!("last {span}: {top} x{}", counts[top.index()]),
        });
    }
    matches
}

/// The latest 5 rounds already appeared earlier in the window: suggest the
/// outcome that followed the most recent earlier occurrence. Weight grows
/// with the number of recurrences.
fn detect_recurrence(w: &[Outcome], tun: &Tunables) -> Vec<PatternMatch> {
    const SPAN: usize = 5;
    let n = w.len();
    let needle = &w[n - SPAN..];
    let mut count = 0usize;
    let mut start = 0usize;
    let mut follower = None;
    for i in 0..n - SPAN {
        if &w[i..i + SPAN] == needle {
            count += 1;
            start = i;
            follower = Some(w[i + SPAN]);
        }
    }
    let Some(implied) = follower else {
        return Vec::new();
    };
    vec![PatternMatch {
        name: "recurrence",
        start,
        len: SPAN,
        implied: Some(implied),
        weight: tun.recurrence_weight + (count as f64 - 1.0) * tun.run_length_weight,
        detail: format!("last {SPAN} rounds seen {count}x before, followed by {implied}"),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome::{Away, Draw, Home};

    fn tun() -> Tunables {
        Tunables::default()
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<&str> = catalog().iter().map(|d| d.name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 14);
    }

    #[test]
    fn short_windows_yield_no_matches_at_all() {
        assert!(scan(&[], &tun()).is_empty());
        assert!(scan(&[Home], &tun()).is_empty());
        assert!(scan(&[Home, Home], &tun()).is_empty());
    }

    #[test]
    fn run_length_is_exact() {
        // Exactly 3 after a break.
        let w = [Away, Home, Home, Home];
        let m = detect_run(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].len, 3);
        assert_eq!(m[0].start, 1);
        assert_eq!(m[0].implied, Some(Home));

        // Exactly 5 from the start of history.
        let w = [Away; 5];
        let m = detect_run(&w, &tun());
        assert_eq!(m[0].len, 5);
        assert_eq!(m[0].start, 0);

        // A 2-run is not a run.
        assert!(detect_run(&[Home, Away, Away], &tun()).is_empty());
    }

    #[test]
    fn longer_runs_weigh_more() {
        let t = tun();
        let w3 = detect_run(&[Home; 3], &t)[0].weight;
        let w5 = detect_run(&[Home; 5], &t)[0].weight;
        assert!(w5 > w3);
    }

    #[test]
    fn break_of_run_is_diagnostic_and_counts_the_broken_run() {
        let w = [Home, Home, Home, Away];
        let m = detect_break_of_run(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].implied, None);
        assert_eq!(m[0].start, 0);
        assert_eq!(m[0].len, 4);

        // Run of 2 before the break is not enough.
        assert!(detect_break_of_run(&[Home, Home, Home, Away, Draw], &tun()).is_empty());
    }

    #[test]
    fn alternation_implies_two_positions_back() {
        let w = [Home, Away, Home, Away];
        let m = detect_alternation(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].implied, Some(Home));
        assert_eq!(m[0].len, 4);

        // Draw participates too: adjacent-differs is the only requirement.
        let w = [Home, Draw, Away, Home, Draw];
        let m = detect_alternation(&w, &tun());
        assert_eq!(m[0].len, 5);
        assert_eq!(m[0].implied, Some(Home));
    }

    #[test]
    fn alternation_needs_four() {
        assert!(detect_alternation(&[Home, Home, Away, Home], &tun()).is_empty());
    }

    #[test]
    fn break_of_alternation_fires_on_a_repeat() {
        let w = [Home, Away, Home, Home];
        let m = detect_break_of_alternation(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].implied, None);
    }

    #[test]
    fn repeated_pair_requires_two_distinct_pairs() {
        assert_eq!(
            detect_repeated_pair(&[Home, Home, Away, Away], &tun()).len(),
            1
        );
        assert!(detect_repeated_pair(&[Home, Home, Home, Home], &tun()).is_empty());
        assert!(detect_repeated_pair(&[Home, Away, Away, Home], &tun()).is_empty());
    }

    #[test]
    fn open_mirror_closes_with_the_outer_outcome() {
        let w = [Away, Home, Draw, Draw];
        let m = detect_mirror(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].len, 3);
        assert_eq!(m[0].implied, Some(Home));
    }

    #[test]
    fn closed_mirror_keeps_cycling() {
        let w = [Home, Away, Away, Home];
        let m = detect_mirror(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].len, 4);
        assert_eq!(m[0].implied, Some(Away));
    }

    #[test]
    fn ladder_matches_one_two_three_with_shared_outer_outcome() {
        let w = [Home, Away, Away, Home, Home, Home];
        let m = detect_ladder(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].start, 0);
        assert_eq!(m[0].len, 6);

        // Outer runs of different outcomes: no ladder.
        let w = [Home, Away, Away, Draw, Draw, Draw];
        assert!(detect_ladder(&w, &tun()).is_empty());

        // 3,2,1 direction also counts.
        let w = [Away, Away, Away, Home, Home, Away];
        assert_eq!(detect_ladder(&w, &tun()).len(), 1);
    }

    #[test]
    fn wave_is_the_exact_four_template() {
        let w = [Draw, Home, Draw, Home];
        let m = detect_wave(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].implied, Some(Draw));
        assert!(detect_wave(&[Home, Home, Away, Home], &tun()).is_empty());
    }

    #[test]
    fn draw_recurrence_needs_a_two_to_four_gap() {
        let w = [Draw, Home, Away, Draw];
        let m = detect_draw_recurrence(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].implied, Some(Draw));

        // Adjacent draws are a run, not a recurrence.
        assert!(detect_draw_recurrence(&[Home, Draw, Draw], &tun()).is_empty());
        // Gap of 5 is out of bounds.
        let w = [Draw, Home, Home, Home, Home, Draw];
        assert!(detect_draw_recurrence(&w, &tun()).is_empty());
    }

    #[test]
    fn draw_center_needs_distinct_non_draw_flanks() {
        assert_eq!(detect_draw_center(&[Home, Draw, Away], &tun()).len(), 1);
        assert!(detect_draw_center(&[Home, Draw, Home], &tun()).is_empty());
        assert!(detect_draw_center(&[Draw, Draw, Away], &tun()).is_empty());
    }

    #[test]
    fn block_reversal_prefers_the_largest_k() {
        let w = [Home, Home, Home, Away, Away, Away];
        let m = detect_block_reversal(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].len, 6);
        assert_eq!(m[0].implied, Some(Home));

        let w = [Draw, Home, Home, Away, Away];
        let m = detect_block_reversal(&w, &tun());
        assert_eq!(m[0].len, 4);
        assert_eq!(m[0].implied, Some(Home));
    }

    #[test]
    fn sandwich_squeezes_a_lone_intruder() {
        let w = [Home, Home, Away, Home, Home];
        let m = detect_sandwich(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].implied, Some(Home));
        assert_eq!(m[0].len, 5);

        let w = [Home, Home, Home, Draw, Home, Home, Home];
        let m = detect_sandwich(&w, &tun());
        assert_eq!(m[0].len, 7);
    }

    #[test]
    fn sandwich_also_pins_a_double_intruder() {
        let w = [Home, Home, Home, Away, Away, Home, Home];
        let m = detect_sandwich(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].len, 7);
        assert_eq!(m[0].implied, Some(Home));

        // Equal 2-2-2 blocks are not the asymmetric form.
        let w = [Home, Home, Away, Away, Home, Home];
        assert!(detect_sandwich(&w, &tun()).is_empty());
    }

    #[test]
    fn recurrence_suggests_the_historical_follower() {
        // The opening H,A,H,A,D was followed by Home and recurs at the tail.
        let w = [
            Home, Away, Home, Away, Draw, Home, Home, Away, Home, Away, Draw,
        ];
        let m = detect_recurrence(&w, &tun());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].start, 0);
        assert_eq!(m[0].len, 5);
        assert_eq!(m[0].implied, Some(Home));
    }

    #[test]
    fn recurrence_weight_grows_with_repeat_count() {
        let t = tun();
        let once = [
            Home, Away, Home, Away, Draw, Home, Home, Away, Home, Away, Draw,
        ];
        // Pure alternation holds the 5-tail twice before the tail itself.
        let twice = [Home, Away, Home, Away, Home, Away, Home, Away, Home];
        let single = detect_recurrence(&once, &t);
        let double = detect_recurrence(&twice, &t);
        assert!(double[0].weight > single[0].weight);
        assert_eq!(double[0].implied, Some(Away));
    }

    #[test]
    fn unseen_tail_sequence_is_not_a_recurrence() {
        let w = [
            Home, Home, Home, Home, Home, Away, Home, Away, Draw, Draw,
        ];
        assert!(detect_recurrence(&w, &tun()).is_empty());
    }

    #[test]
    fn recent_frequency_reports_each_available_span() {
        let w = [Home, Home, Away, Home, Draw, Home, Home];
        let m = detect_recent_frequency(&w, &tun());
        // 7 entries: spans 5 and 7 fire, 10 cannot.
        assert_eq!(m.len(), 2);
        assert!(m.iter().all(|mm| mm.implied.is_none()));
    }

    #[test]
    fn scan_honors_window_bounds() {
        let w = [Home, Away, Home, Away, Home, Away, Draw, Draw, Home, Home];
        for m in scan(&w, &tun()) {
            assert!(m.start + m.len <= w.len(), "{m:?}");
        }
    }
}
