use std::cmp::Ordering;

use crate::models::PlayerSeasonRecord;

pub const BREAKOUT_MAX_AGE: f64 = 26.0;
pub const IMPROVER_MAX_AGE: f64 = 25.0;

pub fn exclude_multi_team(rows: Vec<PlayerSeasonRecord>) -> Vec<PlayerSeasonRecord> {
    rows.into_iter().filter(|row| !row.is_multi_team()).collect()
}

pub fn eligible_history(rows: Vec<PlayerSeasonRecord>) -> Vec<PlayerSeasonRecord> {
    rows.into_iter()
        .filter(|row| row.has_played() && !row.is_multi_team())
        .collect()
}

pub fn young_players(rows: &[PlayerSeasonRecord], max_age: f64) -> Vec<&PlayerSeasonRecord> {
    rows.iter()
        .filter(|row| row.age <= max_age && !row.is_multi_team())
        .collect()
}

// Rankings put NaN after every real value, whichever the direction
pub fn descending_nan_last(a: f64, b: f64) -> Ordering {
    a.is_nan().cmp(&b.is_nan()).then(b.total_cmp(&a))
}

pub fn ascending_nan_last(a: f64, b: f64) -> Ordering {
    a.is_nan().cmp(&b.is_nan()).then(a.total_cmp(&b))
}
