//! Modified Elo rating engine
//!
//! Classic logistic Elo with the per-match K-factor scaled by the domain
//! multiplier policy: base K of 40, increased for submissions and late
//! tournament stages, decreased for decisions and penalty-affected results.
//! The update itself is delegated to `skillratings::elo`; both post-match
//! ratings are rounded to two decimals before being stored and reported.

use crate::config::{EloConfig, MultiplierConfig};
use crate::error::RatingError;
use crate::rating::multiplier::MultiplierPolicy;
use crate::rating::store::{sort_ratings_descending, FighterStore, PeakTracker};
use crate::rating::{EngineKind, EngineRun};
use crate::types::{EloState, MatchAnnotation, MatchFeed, MatchRecord};
use skillratings::elo::{elo, EloConfig as SkillratingsEloConfig, EloRating};
use skillratings::Outcomes;
use tracing::{debug, info};

/// Round a rating to two decimal places for storage and reporting
fn round2(rating: f64) -> f64 {
    (rating * 100.0).round() / 100.0
}

/// Elo engine over a chronological match feed
#[derive(Debug, Clone)]
pub struct EloEngine {
    config: EloConfig,
    policy: MultiplierPolicy,
}

impl EloEngine {
    /// Create an engine from validated configuration
    pub fn new(config: EloConfig, multiplier: MultiplierConfig) -> crate::error::Result<Self> {
        config.validate()?;
        let policy = MultiplierPolicy::new(multiplier)?;
        Ok(Self { config, policy })
    }

    /// Current configuration as JSON, for startup logging and diagnostics
    pub fn config_snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "elo": serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null),
            "multiplier": serde_json::to_value(self.policy.config())
                .unwrap_or(serde_json::Value::Null),
        })
    }

    /// Effective K-factor for one match
    pub fn effective_k(&self, record: &MatchRecord) -> f64 {
        self.config.base_k
            * self
                .policy
                .multiplier(record.win_type, record.penalty(), &record.stage)
    }

    /// Pure single-match update: winner takes outcome 1, loser outcome 0.
    /// The winner's gain and the loser's loss are equal in magnitude before
    /// rounding.
    pub fn update(&self, winner: EloState, loser: EloState, k: f64) -> (EloState, EloState) {
        let (new_winner, new_loser) = elo(
            &winner.into(),
            &loser.into(),
            &Outcomes::WIN,
            &SkillratingsEloConfig { k },
        );
        (
            EloState {
                rating: round2(new_winner.rating),
            },
            EloState {
                rating: round2(new_loser.rating),
            },
        )
    }

    /// Expected score of `a` against `b`
    pub fn expected_score(&self, a: EloState, b: EloState) -> f64 {
        let (expected_a, _) =
            skillratings::elo::expected_score(&EloRating::from(a), &EloRating::from(b));
        expected_a
    }

    /// Process the whole feed in order, producing annotations, current
    /// ratings, and peaks. The feed's chronological order is a precondition;
    /// stores are owned by this run.
    pub fn process(&self, feed: &MatchFeed) -> crate::error::Result<EngineRun> {
        if feed.is_empty() {
            return Err(RatingError::EmptyFeed.into());
        }

        let mut store = FighterStore::new(EloState {
            rating: self.config.initial_rating,
        });
        let mut peaks = PeakTracker::new();
        let mut annotations = Vec::with_capacity(feed.len());

        for record in feed {
            let winner_start = *store.get_or_create(&record.winner);
            let loser_start = *store.get_or_create(&record.loser);

            let k = self.effective_k(record);
            let (winner_end, loser_end) = self.update(winner_start, loser_start, k);

            store.set(&record.winner, winner_end);
            store.set(&record.loser, loser_end);
            peaks.record(&record.winner, winner_end.rating);
            peaks.record(&record.loser, loser_end.rating);

            debug!(
                match_id = %record.match_id,
                year = record.year,
                k,
                winner = %record.winner,
                winner_end = winner_end.rating,
                loser = %record.loser,
                loser_end = loser_end.rating,
                "processed match"
            );

            annotations.push(MatchAnnotation {
                record: record.clone(),
                winner_rating_start: winner_start.rating,
                loser_rating_start: loser_start.rating,
                winner_rating_end: winner_end.rating,
                loser_rating_end: loser_end.rating,
            });
        }

        let current_ratings = sort_ratings_descending(
            store
                .iter()
                .map(|(fighter, state)| (fighter.clone(), state.rating))
                .collect(),
        );

        info!(
            matches = annotations.len(),
            fighters = current_ratings.len(),
            "elo engine pass complete"
        );

        Ok(EngineRun {
            kind: EngineKind::Elo,
            annotations,
            current_ratings,
            peak_ratings: peaks.into_sorted(),
        })
    }
}

impl Default for EloEngine {
    fn default() -> Self {
        Self {
            config: EloConfig::default(),
            policy: MultiplierPolicy::default(),
        }
    }
}
