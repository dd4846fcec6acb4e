//! Configuration management for the grapplerank pipeline
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values for both rating engines.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, EngineSelection, PipelineSettings, ServiceSettings};
pub use rating::{EloConfig, GlickoConfig, MultiplierConfig};
