//! Common types used throughout the rating pipeline

use serde::{Deserialize, Serialize};
use skillratings::elo::EloRating;
use skillratings::glicko2::Glicko2Rating;

/// Unique identifier for fighters
pub type FighterId = String;

/// Normalized method of victory for a match
///
/// Raw result labels are free-form strings in the historical data
/// ("SUB (RNC)", "DECISION - SPLIT", "PTS 2-0", ...); they are collapsed
/// to three categories by substring match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinType {
    Submission,
    Decision,
    Points,
}

impl WinType {
    /// Normalize a raw result label. "SUB" anywhere in the label wins over
    /// "DECISION"; anything else counts as a points victory.
    pub fn from_raw(raw: &str) -> Self {
        if raw.contains("SUB") {
            WinType::Submission
        } else if raw.contains("DECISION") {
            WinType::Decision
        } else {
            WinType::Points
        }
    }
}

impl std::fmt::Display for WinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinType::Submission => write!(f, "SUB"),
            WinType::Decision => write!(f, "DECISION"),
            WinType::Points => write!(f, "POINTS"),
        }
    }
}

/// One contested match, already validated by ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: String,
    /// Synthetic event identifier, assigned per unique `match_id` in feed order
    pub event_id: u32,
    pub year: i32,
    pub winner: FighterId,
    pub loser: FighterId,
    pub win_type: WinType,
    /// Raw advantage/penalty flag; "PEN" marks a penalty-affected result
    pub adv_pen: String,
    /// Tournament stage code (SPF, F, SF, ...); unknown codes are kept verbatim
    pub stage: String,
}

impl MatchRecord {
    /// Whether the result was affected by a penalty
    pub fn penalty(&self) -> bool {
        self.adv_pen == "PEN"
    }
}

/// Chronologically ordered sequence of matches
///
/// Ascending-year order is a contract of this type, not an incidental
/// property of the ingestion layer: rating updates form a causal chain, so
/// every consumer depends on it. Construction stable-sorts by year, which
/// preserves the source order of matches within the same year.
#[derive(Debug, Clone)]
pub struct MatchFeed {
    records: Vec<MatchRecord>,
}

impl MatchFeed {
    /// Build a feed from match records, stable-sorting them by year
    pub fn new(mut records: Vec<MatchRecord>) -> Self {
        records.sort_by_key(|r| r.year);
        Self { records }
    }

    /// Maximum competition year across the whole feed, if non-empty
    pub fn max_year(&self) -> Option<i32> {
        // Records are sorted ascending, so the last one carries the maximum.
        self.records.last().map(|r| r.year)
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a MatchFeed {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Elo rating state for a fighter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloState {
    pub rating: f64,
}

impl Default for EloState {
    fn default() -> Self {
        Self { rating: 1000.0 }
    }
}

impl From<EloRating> for EloState {
    fn from(rating: EloRating) -> Self {
        Self {
            rating: rating.rating,
        }
    }
}

impl From<EloState> for EloRating {
    fn from(state: EloState) -> Self {
        Self {
            rating: state.rating,
        }
    }
}

/// Glicko-2 rating state for a fighter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlickoState {
    pub rating: f64,
    pub deviation: f64,
    pub volatility: f64,
}

impl Default for GlickoState {
    fn default() -> Self {
        Self {
            rating: 1500.0,
            deviation: 350.0,
            volatility: 0.06,
        }
    }
}

impl From<Glicko2Rating> for GlickoState {
    fn from(rating: Glicko2Rating) -> Self {
        Self {
            rating: rating.rating,
            deviation: rating.deviation,
            volatility: rating.volatility,
        }
    }
}

impl From<GlickoState> for Glicko2Rating {
    fn from(state: GlickoState) -> Self {
        Self {
            rating: state.rating,
            deviation: state.deviation,
            volatility: state.volatility,
        }
    }
}

/// Per-match rating annotation produced by one engine pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAnnotation {
    pub record: MatchRecord,
    pub winner_rating_start: f64,
    pub loser_rating_start: f64,
    pub winner_rating_end: f64,
    pub loser_rating_end: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(match_id: &str, year: i32, winner: &str, loser: &str) -> MatchRecord {
        MatchRecord {
            match_id: match_id.to_string(),
            event_id: 0,
            year,
            winner: winner.to_string(),
            loser: loser.to_string(),
            win_type: WinType::Points,
            adv_pen: String::new(),
            stage: "R1".to_string(),
        }
    }

    #[test]
    fn test_win_type_normalization() {
        assert_eq!(WinType::from_raw("SUB (RNC)"), WinType::Submission);
        assert_eq!(WinType::from_raw("DECISION - SPLIT"), WinType::Decision);
        assert_eq!(WinType::from_raw("PTS 4-2"), WinType::Points);
        assert_eq!(WinType::from_raw(""), WinType::Points);
        // Substring check, not equality: SUB takes precedence
        assert_eq!(WinType::from_raw("SUBMISSION"), WinType::Submission);
    }

    #[test]
    fn test_win_type_display() {
        assert_eq!(WinType::Submission.to_string(), "SUB");
        assert_eq!(WinType::Decision.to_string(), "DECISION");
        assert_eq!(WinType::Points.to_string(), "POINTS");
    }

    #[test]
    fn test_penalty_flag() {
        let mut m = record("m1", 2000, "a", "b");
        assert!(!m.penalty());
        m.adv_pen = "PEN".to_string();
        assert!(m.penalty());
        m.adv_pen = "ADV".to_string();
        assert!(!m.penalty());
    }

    #[test]
    fn test_feed_sorts_by_year() {
        let feed = MatchFeed::new(vec![
            record("m3", 2019, "a", "b"),
            record("m1", 2015, "c", "d"),
            record("m2", 2017, "e", "f"),
        ]);

        let years: Vec<i32> = feed.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2015, 2017, 2019]);
        assert_eq!(feed.max_year(), Some(2019));
    }

    #[test]
    fn test_feed_sort_is_stable_within_year() {
        let feed = MatchFeed::new(vec![
            record("m1", 2019, "a", "b"),
            record("m2", 2015, "c", "d"),
            record("m3", 2019, "e", "f"),
        ]);

        let ids: Vec<&str> = feed.iter().map(|r| r.match_id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m1", "m3"]);
    }

    #[test]
    fn test_empty_feed() {
        let feed = MatchFeed::new(vec![]);
        assert!(feed.is_empty());
        assert_eq!(feed.len(), 0);
        assert_eq!(feed.max_year(), None);
    }

    #[test]
    fn test_default_states() {
        assert_eq!(EloState::default().rating, 1000.0);

        let glicko = GlickoState::default();
        assert_eq!(glicko.rating, 1500.0);
        assert_eq!(glicko.deviation, 350.0);
        assert_eq!(glicko.volatility, 0.06);
    }

    #[test]
    fn test_skillratings_conversions() {
        let state = GlickoState {
            rating: 1600.0,
            deviation: 120.0,
            volatility: 0.05,
        };
        let converted: Glicko2Rating = state.into();
        let back: GlickoState = converted.into();
        assert_eq!(back, state);

        let elo = EloState { rating: 1234.5 };
        let converted: EloRating = elo.into();
        assert_eq!(converted.rating, 1234.5);
    }
}
