//! CSV export of engine results
//!
//! Each engine run produces three tables: the per-match annotated history,
//! current ratings, and peak ratings. Rating column labels in the annotated
//! table depend on the engine (`winner_elo_start`... for Elo,
//! `winner_rating_start`... for Glicko), matching the historical exports.

use crate::error::RatingError;
use crate::rating::{EngineKind, EngineRun};
use crate::types::FighterId;
use std::path::{Path, PathBuf};
use tracing::info;

impl EngineKind {
    /// Prefix of the four rating columns in the annotated match table
    fn rating_column_prefix(&self) -> &'static str {
        match self {
            EngineKind::Elo => "elo",
            EngineKind::Glicko => "rating",
        }
    }
}

fn export_error(path: &Path, error: impl std::fmt::Display) -> anyhow::Error {
    RatingError::ExportFailed {
        path: path.display().to_string(),
        message: error.to_string(),
    }
    .into()
}

/// Write all three tables for one engine run into `output_dir`
pub fn write_engine_run(output_dir: &Path, run: &EngineRun) -> crate::error::Result<()> {
    let matches_path = output_dir.join(format!("matches_with_{}.csv", run.kind));
    let current_path = output_dir.join(format!("current_ratings_{}.csv", run.kind));
    let peak_path = output_dir.join(format!("peak_ratings_{}.csv", run.kind));

    write_annotated_matches(&matches_path, run)?;
    write_rating_table(&current_path, "Rating", &run.current_ratings)?;
    write_rating_table(&peak_path, "Peak Rating", &run.peak_ratings)?;

    info!(
        engine = %run.kind,
        output_dir = %output_dir.display(),
        matches = run.annotations.len(),
        fighters = run.current_ratings.len(),
        "exports written"
    );
    Ok(())
}

/// Paths produced by [`write_engine_run`] for an engine
pub fn export_paths(output_dir: &Path, kind: EngineKind) -> Vec<PathBuf> {
    vec![
        output_dir.join(format!("matches_with_{}.csv", kind)),
        output_dir.join(format!("current_ratings_{}.csv", kind)),
        output_dir.join(format!("peak_ratings_{}.csv", kind)),
    ]
}

/// Write the annotated per-match table: input columns plus start/end ratings
pub fn write_annotated_matches(path: &Path, run: &EngineRun) -> crate::error::Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| export_error(path, e))?;
    let prefix = run.kind.rating_column_prefix();

    let winner_start = format!("winner_{}_start", prefix);
    let loser_start = format!("loser_{}_start", prefix);
    let winner_end = format!("winner_{}_end", prefix);
    let loser_end = format!("loser_{}_end", prefix);
    writer
        .write_record([
            "match_id",
            "event_id",
            "year",
            "winner_name",
            "loser_name",
            "win_type",
            "adv_pen",
            "stage",
            winner_start.as_str(),
            loser_start.as_str(),
            winner_end.as_str(),
            loser_end.as_str(),
        ])
        .map_err(|e| export_error(path, e))?;

    for annotation in &run.annotations {
        let record = &annotation.record;
        let event_id = record.event_id.to_string();
        let year = record.year.to_string();
        let win_type = record.win_type.to_string();
        let winner_rating_start = annotation.winner_rating_start.to_string();
        let loser_rating_start = annotation.loser_rating_start.to_string();
        let winner_rating_end = annotation.winner_rating_end.to_string();
        let loser_rating_end = annotation.loser_rating_end.to_string();
        writer
            .write_record([
                record.match_id.as_str(),
                event_id.as_str(),
                year.as_str(),
                record.winner.as_str(),
                record.loser.as_str(),
                win_type.as_str(),
                record.adv_pen.as_str(),
                record.stage.as_str(),
                winner_rating_start.as_str(),
                loser_rating_start.as_str(),
                winner_rating_end.as_str(),
                loser_rating_end.as_str(),
            ])
            .map_err(|e| export_error(path, e))?;
    }

    writer.flush().map_err(|e| export_error(path, e))
}

/// Write a two-column (Fighter, rating) table, already sorted descending
pub fn write_rating_table(
    path: &Path,
    value_header: &str,
    ratings: &[(FighterId, f64)],
) -> crate::error::Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| export_error(path, e))?;

    writer
        .write_record(["Fighter", value_header])
        .map_err(|e| export_error(path, e))?;
    for (fighter, rating) in ratings {
        let rating = rating.to_string();
        writer
            .write_record([fighter.as_str(), rating.as_str()])
            .map_err(|e| export_error(path, e))?;
    }

    writer.flush().map_err(|e| export_error(path, e))
}
