//! Rating engines built on the skillratings crate
//!
//! This module provides the two rating pipelines over a chronological match
//! feed: a modified Elo engine (domain-scaled K-factor) and a Glicko-2
//! hybrid engine (standard Glicko-2 step with a domain-scaled, time-decayed
//! rating delta), plus the shared multiplier policy and run-owned stores.

pub mod elo;
pub mod glicko;
pub mod multiplier;
pub mod store;

// Re-export commonly used types
pub use elo::EloEngine;
pub use glicko::GlickoHybridEngine;
pub use multiplier::MultiplierPolicy;
pub use store::{FighterStore, PeakTracker};

use crate::types::{FighterId, MatchAnnotation};
use serde::{Deserialize, Serialize};

/// Which engine produced a result; selects the rating column labels on export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineKind {
    Elo,
    Glicko,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Elo => write!(f, "elo"),
            EngineKind::Glicko => write!(f, "glicko"),
        }
    }
}

/// Complete output of one engine pass over a match feed
#[derive(Debug, Clone)]
pub struct EngineRun {
    pub kind: EngineKind,
    /// Per-match start/end ratings, in feed order
    pub annotations: Vec<MatchAnnotation>,
    /// Current ratings, sorted descending
    pub current_ratings: Vec<(FighterId, f64)>,
    /// Peak ratings, sorted descending
    pub peak_ratings: Vec<(FighterId, f64)>,
}
