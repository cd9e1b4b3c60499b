use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// One round of the three-way stream.
///
/// The declaration order doubles as the arbiter's fixed tie-break
/// preference: Home, then Away, then Draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Home,
    Away,
    Draw,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Home, Outcome::Away, Outcome::Draw];

    /// Stable position in per-outcome arrays (`[f64; 3]` score boards etc).
    pub fn index(self) -> usize {
        match self {
            Outcome::Home => 0,
            Outcome::Away => 1,
            Outcome::Draw => 2,
        }
    }

    /// Canonical single-letter feed symbol.
    pub fn symbol(self) -> char {
        match self {
            Outcome::Home => 'H',
            Outcome::Away => 'A',
            Outcome::Draw => 'D',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Home => "Home",
            Outcome::Away => "Away",
            Outcome::Draw => "Draw",
        }
    }

    /// The reversal target after a Home/Away round. Draw has no opposite,
    /// so reversal heuristics skip it.
    pub fn opposite(self) -> Option<Outcome> {
        match self {
            Outcome::Home => Some(Outcome::Away),
            Outcome::Away => Some(Outcome::Home),
            Outcome::Draw => None,
        }
    }

    /// Parses a feed symbol. Accepts the canonical `H`/`A`/`D` plus the
    /// legacy feed letters `C`/`V`/`E` (casa/visitante/empate), full words
    /// in either language, case-insensitive. Anything else is rejected
    /// before it can reach the history log.
    pub fn from_symbol(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "H" | "C" | "HOME" | "CASA" => Ok(Outcome::Home),
            "A" | "V" | "AWAY" | "VISITANTE" => Ok(Outcome::Away),
            "D" | "E" | "DRAW" | "EMPATE" => Ok(Outcome::Draw),
            _ => bail!("invalid outcome symbol {raw:?} (expected H, A or D)"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn parses_canonical_and_legacy_symbols() {
        assert_eq!(Outcome::from_symbol("H").unwrap(), Outcome::Home);
        assert_eq!(Outcome::from_symbol(" a ").unwrap(), Outcome::Away);
        assert_eq!(Outcome::from_symbol("e").unwrap(), Outcome::Draw);
        assert_eq!(Outcome::from_symbol("Visitante").unwrap(), Outcome::Away);
        assert_eq!(Outcome::from_symbol("casa").unwrap(), Outcome::Home);
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert!(Outcome::from_symbol("X").is_err());
        assert!(Outcome::from_symbol("").is_err());
        assert!(Outcome::from_symbol("HD").is_err());
    }

    #[test]
    fn tie_break_order_is_home_away_draw() {
        assert!(Outcome::Home < Outcome::Away);
        assert!(Outcome::Away < Outcome::Draw);
    }
}
