//! Grapplerank - skill ratings for grappling match histories
//!
//! This crate computes Elo and Glicko-2 hybrid skill ratings from a
//! chronological match history, with domain-specific multipliers for win
//! type, penalties, and tournament stage, and exports annotated matches,
//! current ratings, and peak ratings as CSV tables.

pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{EloEngine, EngineKind, EngineRun, GlickoHybridEngine, MultiplierPolicy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
