//! Test fixtures for building synthetic match feeds

use grapplerank::types::{MatchFeed, MatchRecord, WinType};

/// Build a match record with neutral defaults (points win, no penalty, R1)
pub fn match_record(match_id: &str, year: i32, winner: &str, loser: &str) -> MatchRecord {
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

/// Tweak result details on top of `match_record`
pub fn with_result(
    mut record: MatchRecord,
    win_type: WinType,
    penalty: bool,
    stage: &str,
) -> MatchRecord {
    record.win_type = win_type;
    record.adv_pen = if penalty {
        "PEN".to_string()
    } else {
        String::new()
    };
    record.stage = stage.to_string();
    record
}

/// A small feed with a result cycle across three fighters and mixed results
pub fn mixed_feed() -> MatchFeed {
    MatchFeed::new(vec![
        with_result(
            match_record("e1", 2015, "galvao", "barral"),
            WinType::Submission,
            false,
            "SF",
        ),
        with_result(
            match_record("e1", 2015, "barral", "ryan"),
            WinType::Decision,
            true,
            "F",
        ),
        match_record("e2", 2017, "ryan", "galvao"),
        with_result(
            match_record("e3", 2019, "galvao", "ryan"),
            WinType::Submission,
            false,
            "SPF",
        ),
        match_record("e3", 2019, "pena", "barral"),
    ])
}
