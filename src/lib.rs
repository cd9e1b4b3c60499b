//! Pattern-detection and confidence-scoring engine for a live stream of
//! three-way game outcomes (Home/Away/Draw).
//!
//! The pipeline per recorded round: append to the bounded history log,
//! resolve any pending guarantee against the new outcome, scan the
//! analysis window against the pattern catalog, fold matches and
//! heuristics into per-outcome scores, arbitrate a single suggestion and
//! possibly arm a new guarantee. Everything is deterministic and
//! synchronous; the only mutable state is the log and the pending
//! snapshot, both owned by [`engine::Engine`].

pub mod engine;
pub mod fake_feed;
pub mod guarantee;
pub mod history;
pub mod outcome;
pub mod patterns;
pub mod persist;
pub mod scoring;
pub mod stats;
pub mod tunables;

pub use engine::{Engine, RoundUpdate};
pub use guarantee::{GuaranteeRecord, PendingGuarantee};
pub use history::Order;
pub use outcome::Outcome;
pub use scoring::Suggestion;
pub use stats::Statistics;
pub use tunables::Tunables;
