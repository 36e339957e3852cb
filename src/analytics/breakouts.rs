use crate::{
    analytics::filters::{BREAKOUT_MAX_AGE, descending_nan_last, young_players},
    data::DataLoader,
    errors::AppError,
    models::{
        Conference, PlayerSeasonRecord,
        outlook::{BreakoutPlayer, BreakoutReport, ConferenceSplit, round_to},
    },
};

pub const BREAKOUTS_PER_CONFERENCE: usize = 5;

// Points carry half the weight; a blank stat gives a NaN score
pub fn breakout_score(row: &PlayerSeasonRecord) -> f64 {
    0.5 * row.points + 0.2 * row.rebounds + 0.2 * row.assists + 0.1 * row.steals
}

pub fn rank_breakouts(rows: &[PlayerSeasonRecord], season: &str) -> BreakoutReport {
    let players = young_players(rows, BREAKOUT_MAX_AGE);

    let mut conferences = ConferenceSplit::default();
    for conference in Conference::ALL {
        let mut scored: Vec<(&PlayerSeasonRecord, f64)> = players
            .iter()
            .filter(|row| row.conference() == conference)
            .map(|&row| (row, breakout_score(row)))
            .collect();
        scored.sort_by(|a, b| descending_nan_last(a.1, b.1));

        *conferences.get_mut(conference) = scored
            .into_iter()
            .take(BREAKOUTS_PER_CONFERENCE)
            .map(|(row, score)| BreakoutPlayer {
                name: row.name.clone(),
                team: row.team.clone(),
                score: round_to(score, 2),
                player_id: row.player_id,
            })
            .collect();
    }

    BreakoutReport {
        season: season.to_string(),
        conferences,
    }
}

pub fn breakout_report(loader: &DataLoader, season: &str) -> Result<BreakoutReport, AppError> {
    let rows = loader.load_season(season)?;
    if rows.is_empty() {
        return Err(AppError::NoPlayerData(season.to_string()));
    }
    Ok(rank_breakouts(&rows, season))
}
