//! Rating engine configuration
//!
//! Tuning constants for the Elo engine, the Glicko-2 hybrid engine, and the
//! shared domain multiplier policy. The defaults are the tuned ADCC values
//! and are fixed domain policy; they are configurable mainly so tests can
//! isolate individual factors.

use crate::error::RatingError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for the Elo rating engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloConfig {
    /// Rating assigned to a fighter on first appearance
    pub initial_rating: f64,
    /// Base K-factor before domain multipliers are applied
    pub base_k: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1000.0,
            base_k: 40.0,
        }
    }
}

impl EloConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.base_k <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Elo base K-factor must be positive".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Configuration for the Glicko-2 hybrid engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlickoConfig {
    /// Rating assigned to a fighter on first appearance
    pub initial_rating: f64,
    /// Rating deviation assigned on first appearance
    pub initial_deviation: f64,
    /// Volatility assigned on first appearance
    pub initial_volatility: f64,
    /// Glicko-2 system constant constraining volatility change
    pub tau: f64,
    /// Convergence tolerance for the volatility solver
    pub convergence_tolerance: f64,
    /// Exponential time-decay rate applied per year of distance from the
    /// most recent year in the feed
    pub decay_rate: f64,
}

impl Default for GlickoConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1500.0,
            initial_deviation: 350.0,
            initial_volatility: 0.06,
            tau: 0.5,
            convergence_tolerance: 0.000001,
            decay_rate: 0.03,
        }
    }
}

impl GlickoConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.initial_deviation <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Initial deviation must be positive".to_string(),
            }
            .into());
        }
        if self.initial_volatility <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Initial volatility must be positive".to_string(),
            }
            .into());
        }
        if self.tau <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Tau must be positive".to_string(),
            }
            .into());
        }
        if self.convergence_tolerance <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Convergence tolerance must be positive".to_string(),
            }
            .into());
        }
        if self.decay_rate < 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Decay rate must be non-negative".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Configuration for the domain multiplier policy shared by both engines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplierConfig {
    /// Factor applied to submission wins
    pub submission_factor: f64,
    /// Factor applied to decision wins
    pub decision_factor: f64,
    /// Factor applied when the result was affected by a penalty
    pub penalty_factor: f64,
    /// Factor for stage codes absent from the table
    pub default_stage_factor: f64,
    /// Per-stage factors keyed by stage code
    /// (kept last so TOML serialization emits scalars before the table)
    pub stage_factors: HashMap<String, f64>,
}

impl Default for MultiplierConfig {
    fn default() -> Self {
        let stage_factors = [
            ("SPF", 1.4),
            ("F", 1.3),
            ("3RD", 1.15),
            ("3PLC", 1.15),
            ("SF", 1.2),
            ("4F", 1.1),
            ("R2", 1.1),
            ("R1", 1.0),
            ("E1", 1.0),
            ("8F", 1.0),
        ]
        .into_iter()
        .map(|(stage, factor)| (stage.to_string(), factor))
        .collect();

        Self {
            submission_factor: 1.15,
            decision_factor: 0.85,
            penalty_factor: 0.9,
            default_stage_factor: 1.0,
            stage_factors,
        }
    }
}

impl MultiplierConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        let scalar_factors = [
            ("submission", self.submission_factor),
            ("decision", self.decision_factor),
            ("penalty", self.penalty_factor),
            ("default stage", self.default_stage_factor),
        ];
        for (name, factor) in scalar_factors {
            if factor <= 0.0 {
                return Err(RatingError::ConfigurationError {
                    message: format!("{} factor must be positive", name),
                }
                .into());
            }
        }
        for (stage, factor) in &self.stage_factors {
            if *factor <= 0.0 {
                return Err(RatingError::ConfigurationError {
                    message: format!("stage factor for {} must be positive", stage),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elo_config_default() {
        let config = EloConfig::default();
        assert_eq!(config.initial_rating, 1000.0);
        assert_eq!(config.base_k, 40.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_elo_config_validation() {
        let config = EloConfig {
            base_k: 0.0,
            ..EloConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_glicko_config_default() {
        let config = GlickoConfig::default();
        assert_eq!(config.initial_rating, 1500.0);
        assert_eq!(config.initial_deviation, 350.0);
        assert_eq!(config.initial_volatility, 0.06);
        assert_eq!(config.tau, 0.5);
        assert_eq!(config.decay_rate, 0.03);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_glicko_config_validation() {
        let mut config = GlickoConfig::default();
        config.tau = -0.5;
        assert!(config.validate().is_err());

        config = GlickoConfig::default();
        config.decay_rate = -0.01;
        assert!(config.validate().is_err());

        // A zero decay rate disables decay but is valid
        config = GlickoConfig::default();
        config.decay_rate = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_multiplier_config_default_table() {
        let config = MultiplierConfig::default();
        assert_eq!(config.stage_factors["SPF"], 1.4);
        assert_eq!(config.stage_factors["F"], 1.3);
        assert_eq!(config.stage_factors["3RD"], 1.15);
        assert_eq!(config.stage_factors["3PLC"], 1.15);
        assert_eq!(config.stage_factors["SF"], 1.2);
        assert_eq!(config.stage_factors["4F"], 1.1);
        assert_eq!(config.stage_factors["R2"], 1.1);
        assert_eq!(config.stage_factors["R1"], 1.0);
        assert_eq!(config.stage_factors["E1"], 1.0);
        assert_eq!(config.stage_factors["8F"], 1.0);
        assert_eq!(config.stage_factors.len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_multiplier_config_validation() {
        let mut config = MultiplierConfig::default();
        config.penalty_factor = -0.9;
        assert!(config.validate().is_err());

        config = MultiplierConfig::default();
        config.stage_factors.insert("F".to_string(), 0.0);
        assert!(config.validate().is_err());
    }
}
