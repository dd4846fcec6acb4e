//! Domain multiplier policy shared by both rating engines
//!
//! Maps (win type, penalty flag, tournament stage) to a dimensionless
//! scaling factor: the Elo engine scales its K-factor with it, the Glicko-2
//! hybrid engine scales its rating delta with it. Submission wins and late
//! tournament stages move ratings further; decision wins and penalty-affected
//! results move them less.

use crate::config::MultiplierConfig;
use crate::types::WinType;

/// Stateless multiplier policy built from tuned domain factors
#[derive(Debug, Clone)]
pub struct MultiplierPolicy {
    config: MultiplierConfig,
}

impl MultiplierPolicy {
    /// Create a policy from validated configuration
    pub fn new(config: MultiplierConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Factor contributed by the method of victory
    pub fn win_type_factor(&self, win_type: WinType) -> f64 {
        match win_type {
            WinType::Submission => self.config.submission_factor,
            WinType::Decision => self.config.decision_factor,
            WinType::Points => 1.0,
        }
    }

    /// Factor contributed by the tournament stage; unknown codes fall back
    /// to the default factor
    pub fn stage_factor(&self, stage: &str) -> f64 {
        self.config
            .stage_factors
            .get(stage)
            .copied()
            .unwrap_or(self.config.default_stage_factor)
    }

    /// The configuration backing this policy
    pub fn config(&self) -> &MultiplierConfig {
        &self.config
    }

    /// Combined multiplier for one match result
    pub fn multiplier(&self, win_type: WinType, penalty: bool, stage: &str) -> f64 {
        let mut factor = self.win_type_factor(win_type);
        if penalty {
            factor *= self.config.penalty_factor;
        }
        factor * self.stage_factor(stage)
    }
}

impl Default for MultiplierPolicy {
    fn default() -> Self {
        Self {
            config: MultiplierConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_type_factors() {
        let policy = MultiplierPolicy::default();
        assert_eq!(policy.win_type_factor(WinType::Submission), 1.15);
        assert_eq!(policy.win_type_factor(WinType::Decision), 0.85);
        assert_eq!(policy.win_type_factor(WinType::Points), 1.0);
    }

    #[test]
    fn test_stage_table() {
        let policy = MultiplierPolicy::default();
        assert_eq!(policy.stage_factor("SPF"), 1.4);
        assert_eq!(policy.stage_factor("F"), 1.3);
        assert_eq!(policy.stage_factor("SF"), 1.2);
        assert_eq!(policy.stage_factor("3RD"), 1.15);
        assert_eq!(policy.stage_factor("3PLC"), 1.15);
        assert_eq!(policy.stage_factor("4F"), 1.1);
        assert_eq!(policy.stage_factor("R2"), 1.1);
        assert_eq!(policy.stage_factor("R1"), 1.0);
        assert_eq!(policy.stage_factor("E1"), 1.0);
        assert_eq!(policy.stage_factor("8F"), 1.0);
    }

    #[test]
    fn test_unknown_stage_falls_back_to_default() {
        let policy = MultiplierPolicy::default();
        assert_eq!(policy.stage_factor("QUALIFIER"), 1.0);
        assert_eq!(policy.stage_factor(""), 1.0);
        // Identical to R1 by construction
        assert_eq!(policy.stage_factor("QUALIFIER"), policy.stage_factor("R1"));
    }

    #[test]
    fn test_combined_multiplier() {
        let policy = MultiplierPolicy::default();

        // Submission with penalty in the final: 1.15 * 0.9 * 1.3
        let m = policy.multiplier(WinType::Submission, true, "F");
        assert!((m - 1.3455).abs() < 1e-12);

        // Points, no penalty, first round: all factors neutral
        assert_eq!(policy.multiplier(WinType::Points, false, "R1"), 1.0);

        // Decision in a semifinal: 0.85 * 1.2
        let m = policy.multiplier(WinType::Decision, false, "SF");
        assert!((m - 1.02).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MultiplierConfig {
            penalty_factor: 0.0,
            ..MultiplierConfig::default()
        };
        assert!(MultiplierPolicy::new(config).is_err());
    }
}
