//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! grapplerank pipeline, including TOML file loading, environment variable
//! fallbacks, and validation.

use crate::config::rating::{EloConfig, GlickoConfig, MultiplierConfig};
use crate::error::RatingError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub pipeline: PipelineSettings,
    pub elo: EloConfig,
    pub glicko: GlickoConfig,
    pub multiplier: MultiplierConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Pipeline input/output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Path to the semicolon-delimited historical match CSV
    pub input_path: PathBuf,
    /// Directory receiving the exported tables
    pub output_dir: PathBuf,
    /// Field delimiter of the input file
    pub delimiter: char,
    /// Which engine(s) to run
    pub engine: EngineSelection,
}

/// Which rating engine(s) a run executes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EngineSelection {
    Elo,
    Glicko,
    #[default]
    Both,
}

impl EngineSelection {
    pub fn runs_elo(&self) -> bool {
        matches!(self, EngineSelection::Elo | EngineSelection::Both)
    }

    pub fn runs_glicko(&self) -> bool {
        matches!(self, EngineSelection::Glicko | EngineSelection::Both)
    }
}

impl std::fmt::Display for EngineSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineSelection::Elo => write!(f, "elo"),
            EngineSelection::Glicko => write!(f, "glicko"),
            EngineSelection::Both => write!(f, "both"),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "grapplerank".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("adcc_historical_data.csv"),
            output_dir: PathBuf::from("."),
            delimiter: ';',
            engine: EngineSelection::Both,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(log_level) = env::var("GRAPPLERANK_LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(input) = env::var("GRAPPLERANK_INPUT") {
            config.pipeline.input_path = PathBuf::from(input);
        }
        if let Ok(output_dir) = env::var("GRAPPLERANK_OUTPUT_DIR") {
            config.pipeline.output_dir = PathBuf::from(output_dir);
        }

        Ok(config)
    }
}

/// Validate the complete configuration
pub fn validate_config(config: &AppConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.service.log_level.as_str()) {
        return Err(RatingError::ConfigurationError {
            message: format!("invalid log level: {}", config.service.log_level),
        }
        .into());
    }

    if !config.pipeline.delimiter.is_ascii() {
        return Err(RatingError::ConfigurationError {
            message: "delimiter must be an ASCII character".to_string(),
        }
        .into());
    }

    config.elo.validate()?;
    config.glicko.validate()?;
    config.multiplier.validate()?;

    Ok(())
}
