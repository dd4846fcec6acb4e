//! Run-owned rating state storage
//!
//! Both engines own a `FighterStore` and a `PeakTracker` for the duration of
//! one pass over the match feed. Stores are built fresh per run and never
//! shared between engines, which keeps the engines reentrant and lets tests
//! run them against isolated state.

use crate::types::FighterId;
use std::collections::HashMap;

/// Lazy-initializing map from fighter identity to rating state
///
/// A fighter's state exists iff the fighter has appeared in at least one
/// processed match; first access creates it from the model default. There is
/// no removal operation, entries persist for the life of the run.
#[derive(Debug, Clone)]
pub struct FighterStore<S: Clone> {
    states: HashMap<FighterId, S>,
    default_state: S,
}

impl<S: Clone> FighterStore<S> {
    /// Create an empty store with the given default state for new fighters
    pub fn new(default_state: S) -> Self {
        Self {
            states: HashMap::new(),
            default_state,
        }
    }

    /// Get a fighter's state, creating it at the default on first appearance
    pub fn get_or_create(&mut self, fighter: &str) -> &mut S {
        let default_state = &self.default_state;
        self.states
            .entry(fighter.to_string())
            .or_insert_with(|| default_state.clone())
    }

    /// Get a fighter's state without creating it
    pub fn get(&self, fighter: &str) -> Option<&S> {
        self.states.get(fighter)
    }

    /// Insert or replace a fighter's state
    pub fn set(&mut self, fighter: &str, state: S) {
        self.states.insert(fighter.to_string(), state);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FighterId, &S)> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Running maximum rating per fighter
///
/// Monotonically non-decreasing per fighter by construction.
#[derive(Debug, Clone, Default)]
pub struct PeakTracker {
    peaks: HashMap<FighterId, f64>,
}

impl PeakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a post-match rating, keeping the running maximum
    pub fn record(&mut self, fighter: &str, rating: f64) {
        self.peaks
            .entry(fighter.to_string())
            .and_modify(|peak| *peak = peak.max(rating))
            .or_insert(rating);
    }

    pub fn get(&self, fighter: &str) -> Option<f64> {
        self.peaks.get(fighter).copied()
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Consume the tracker, returning peaks sorted descending by rating
    /// (ties broken by fighter name for deterministic output)
    pub fn into_sorted(self) -> Vec<(FighterId, f64)> {
        sort_ratings_descending(self.peaks.into_iter().collect())
    }
}

/// Sort (fighter, rating) pairs descending by rating, ties by name ascending
pub fn sort_ratings_descending(mut ratings: Vec<(FighterId, f64)>) -> Vec<(FighterId, f64)> {
    ratings.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ratings
}
