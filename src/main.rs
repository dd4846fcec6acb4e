//! Main entry point for the grapplerank pipeline
//!
//! Reads a historical match CSV, runs the selected rating engine(s) over it
//! in chronological order, and writes the annotated match, current-rating,
//! and peak-rating tables.

use anyhow::Result;
use clap::Parser;
use grapplerank::config::{validate_config, AppConfig, EngineSelection};
use grapplerank::export::write_engine_run;
use grapplerank::ingest::read_feed;
use grapplerank::rating::{EloEngine, GlickoHybridEngine};
use grapplerank::types::MatchFeed;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Grapplerank - Elo and Glicko-2 hybrid ratings for grappling match histories
#[derive(Parser)]
#[command(
    name = "grapplerank",
    version,
    about = "Compute Elo and Glicko-2 hybrid skill ratings from a grappling match history",
    long_about = "Grapplerank processes a chronological match history and produces per-fighter \
                 current and peak rating tables plus a per-match annotated history, under a \
                 modified Elo system and a Glicko-2 based system, both scaled by win type, \
                 penalties, and tournament stage."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Input CSV override
    #[arg(short, long, value_name = "FILE", help = "Historical match CSV to process")]
    input: Option<PathBuf>,

    /// Output directory override
    #[arg(short, long, value_name = "DIR", help = "Directory receiving the exported tables")]
    output_dir: Option<PathBuf>,

    /// Engine selection override
    #[arg(short, long, value_enum, help = "Which rating engine(s) to run")]
    engine: Option<EngineSelection>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without processing")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(input) = &args.input {
        config.pipeline.input_path = input.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.pipeline.output_dir = output_dir.clone();
    }
    if let Some(engine) = args.engine {
        config.pipeline.engine = engine;
    }
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    validate_config(&config)?;
    Ok(config)
}

/// Run one engine over its own copy of the feed and export the results.
/// Engines are independent: a failure here never corrupts the other run.
fn run_elo(config: &AppConfig, feed: &MatchFeed) -> Result<()> {
    let engine = EloEngine::new(config.elo.clone(), config.multiplier.clone())?;
    debug!(snapshot = %engine.config_snapshot(), "elo engine configuration");
    let run = engine.process(feed)?;
    write_engine_run(&config.pipeline.output_dir, &run)
}

fn run_glicko(config: &AppConfig, feed: &MatchFeed) -> Result<()> {
    let engine = GlickoHybridEngine::new(config.glicko.clone(), config.multiplier.clone())?;
    debug!(snapshot = %engine.config_snapshot(), "glicko engine configuration");
    let run = engine.process(feed)?;
    write_engine_run(&config.pipeline.output_dir, &run)
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("grapplerank {}", grapplerank::VERSION);
    info!(
        input = %config.pipeline.input_path.display(),
        output_dir = %config.pipeline.output_dir.display(),
        engine = %config.pipeline.engine,
        "configuration loaded"
    );

    if args.dry_run {
        info!("Configuration validation successful");
        info!("Dry run completed - exiting without processing");
        return Ok(());
    }

    let delimiter = config.pipeline.delimiter as u8;
    let feed = read_feed(&config.pipeline.input_path, delimiter)?;

    let mut failures = 0;
    if config.pipeline.engine.runs_elo() {
        if let Err(e) = run_elo(&config, &feed) {
            error!("Elo engine run failed: {:#}", e);
            failures += 1;
        }
    }
    if config.pipeline.engine.runs_glicko() {
        if let Err(e) = run_glicko(&config, &feed) {
            error!("Glicko hybrid engine run failed: {:#}", e);
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{} engine run(s) failed", failures);
    }

    info!("Rating calculation complete");
    Ok(())
}
