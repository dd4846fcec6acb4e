//! CSV ingestion for historical match data
//!
//! Reads the semicolon-delimited result history, validates each row, and
//! produces a chronologically sorted [`MatchFeed`] with synthetic event
//! identifiers assigned per unique match id. Validation is strict about
//! structure (missing fighters, unparseable years abort the run) but
//! permissive about vocabulary: unknown win-type labels normalize to a
//! points win and unknown stage codes are carried through verbatim.

use crate::error::RatingError;
use crate::types::{MatchFeed, MatchRecord, WinType};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::info;

/// One row of the input file, before validation
#[derive(Debug, Clone, Deserialize)]
struct RawMatchRow {
    match_id: String,
    year: String,
    winner_name: String,
    loser_name: String,
    win_type: String,
    adv_pen: String,
    stage: String,
}

/// Read and validate a match feed from a delimited file
pub fn read_feed(path: &Path, delimiter: u8) -> crate::error::Result<MatchFeed> {
    let file = File::open(path).map_err(|e| RatingError::IngestFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let feed = read_feed_from_reader(file, delimiter)?;
    info!(
        path = %path.display(),
        matches = feed.len(),
        max_year = feed.max_year(),
        "ingested match feed"
    );
    Ok(feed)
}

/// Read and validate a match feed from any reader
pub fn read_feed_from_reader<R: io::Read>(
    reader: R,
    delimiter: u8,
) -> crate::error::Result<MatchFeed> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<RawMatchRow>().enumerate() {
        // Header occupies line 1
        let line = index as u64 + 2;
        let row = row.map_err(|e| RatingError::InvalidRecord {
            line,
            reason: e.to_string(),
        })?;
        records.push(validate_row(row, line)?);
    }

    // Stable sort keeps same-year matches in source order
    records.sort_by_key(|r| r.year);
    assign_event_ids(&mut records);

    Ok(MatchFeed::new(records))
}

fn validate_row(row: RawMatchRow, line: u64) -> crate::error::Result<MatchRecord> {
    if row.winner_name.is_empty() {
        return Err(RatingError::InvalidRecord {
            line,
            reason: "missing winner name".to_string(),
        }
        .into());
    }
    if row.loser_name.is_empty() {
        return Err(RatingError::InvalidRecord {
            line,
            reason: "missing loser name".to_string(),
        }
        .into());
    }
    if row.win_type.is_empty() {
        return Err(RatingError::InvalidRecord {
            line,
            reason: "missing win type".to_string(),
        }
        .into());
    }
    let year: i32 = row.year.parse().map_err(|_| RatingError::InvalidRecord {
        line,
        reason: format!("invalid year: {:?}", row.year),
    })?;

    Ok(MatchRecord {
        match_id: row.match_id,
        event_id: 0, // assigned after sorting
        year,
        winner: row.winner_name,
        loser: row.loser_name,
        win_type: WinType::from_raw(&row.win_type),
        adv_pen: row.adv_pen,
        stage: row.stage,
    })
}

/// Assign synthetic event ids per unique match id, in feed order, from 1
fn assign_event_ids(records: &mut [MatchRecord]) {
    let mut ids: HashMap<String, u32> = HashMap::new();
    for record in records.iter_mut() {
        let next = ids.len() as u32 + 1;
        record.event_id = *ids.entry(record.match_id.clone()).or_insert(next);
    }
}
