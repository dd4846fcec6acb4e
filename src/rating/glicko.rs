//! Glicko-2 hybrid rating engine
//!
//! Delegates the statistical update to a standard Glicko-2 single-encounter
//! step (`skillratings::glicko2`), then rescales the resulting rating delta
//! by the domain multiplier policy and an exponential time-decay factor.
//! Only the rating value is rescaled; deviation and volatility follow the
//! unmodified Glicko-2 trajectory. This asymmetry is deliberate domain
//! policy and changing it would alter convergence behavior.
//!
//! The decay factor is measured against the feed-global maximum year, not a
//! per-match "now": every match in the dataset decays relative to the same
//! snapshot year.

use crate::config::{GlickoConfig, MultiplierConfig};
use crate::error::RatingError;
use crate::rating::multiplier::MultiplierPolicy;
use crate::rating::store::{sort_ratings_descending, FighterStore, PeakTracker};
use crate::rating::{EngineKind, EngineRun};
use crate::types::{GlickoState, MatchAnnotation, MatchFeed};
use skillratings::glicko2::{glicko2, Glicko2Config};
use skillratings::Outcomes;
use tracing::{debug, info};

/// Pure single-encounter Glicko-2 step: both sides are updated against the
/// opponent's pre-match state, outcome 1 for the winner and 0 for the loser.
pub fn glicko_step(
    winner: GlickoState,
    loser: GlickoState,
    config: &Glicko2Config,
) -> (GlickoState, GlickoState) {
    let (new_winner, new_loser) = glicko2(&winner.into(), &loser.into(), &Outcomes::WIN, config);
    (new_winner.into(), new_loser.into())
}

/// Glicko-2 hybrid engine over a chronological match feed
#[derive(Debug, Clone)]
pub struct GlickoHybridEngine {
    config: GlickoConfig,
    policy: MultiplierPolicy,
}

impl GlickoHybridEngine {
    /// Create an engine from validated configuration
    pub fn new(config: GlickoConfig, multiplier: MultiplierConfig) -> crate::error::Result<Self> {
        config.validate()?;
        let policy = MultiplierPolicy::new(multiplier)?;
        Ok(Self { config, policy })
    }

    /// Current configuration as JSON, for startup logging and diagnostics
    pub fn config_snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "glicko": serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null),
            "multiplier": serde_json::to_value(self.policy.config())
                .unwrap_or(serde_json::Value::Null),
        })
    }

    /// Time-decay factor for a match, relative to the feed's most recent year
    pub fn decay_factor(&self, max_year: i32, match_year: i32) -> f64 {
        (-self.config.decay_rate * f64::from(max_year - match_year)).exp()
    }

    fn glicko2_config(&self) -> Glicko2Config {
        Glicko2Config {
            tau: self.config.tau,
            convergence_tolerance: self.config.convergence_tolerance,
        }
    }

    /// Process the whole feed in order. The feed's chronological order is a
    /// precondition; stores are owned by this run.
    pub fn process(&self, feed: &MatchFeed) -> crate::error::Result<EngineRun> {
        let max_year = feed.max_year().ok_or(RatingError::EmptyFeed)?;

        let step_config = self.glicko2_config();
        let mut store = FighterStore::new(GlickoState {
            rating: self.config.initial_rating,
            deviation: self.config.initial_deviation,
            volatility: self.config.initial_volatility,
        });
        let mut peaks = PeakTracker::new();
        let mut annotations = Vec::with_capacity(feed.len());

        for record in feed {
            let winner_start = *store.get_or_create(&record.winner);
            let loser_start = *store.get_or_create(&record.loser);

            // Standard Glicko-2 trajectory for rating, deviation, volatility
            let (raw_winner, raw_loser) = glicko_step(winner_start, loser_start, &step_config);

            // Hybrid rescale of the rating delta only
            let multiplier = self
                .policy
                .multiplier(record.win_type, record.penalty(), &record.stage)
                * self.decay_factor(max_year, record.year);

            let winner_end = GlickoState {
                rating: winner_start.rating
                    + (raw_winner.rating - winner_start.rating) * multiplier,
                ..raw_winner
            };
            let loser_end = GlickoState {
                rating: loser_start.rating - (loser_start.rating - raw_loser.rating) * multiplier,
                ..raw_loser
            };

            store.set(&record.winner, winner_end);
            store.set(&record.loser, loser_end);
            peaks.record(&record.winner, winner_end.rating);
            peaks.record(&record.loser, loser_end.rating);

            debug!(
                match_id = %record.match_id,
                year = record.year,
                multiplier,
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
            "glicko hybrid engine pass complete"
        );

        Ok(EngineRun {
            kind: EngineKind::Glicko,
            annotations,
            current_ratings,
            peak_ratings: peaks.into_sorted(),
        })
    }
}

impl Default for GlickoHybridEngine {
    fn default() -> Self {
        Self {
            config: GlickoConfig::default(),
            policy: MultiplierPolicy::default(),
        }
    }
}
