use crate::{
    analytics::filters::{IMPROVER_MAX_AGE, descending_nan_last, young_players},
    data::DataLoader,
    errors::AppError,
    models::{
        Conference, PlayerSeasonRecord,
        outlook::{ConferenceSplit, ImproverProjection, ImproverReport, round_to},
    },
};

pub const IMPROVERS_PER_CONFERENCE: usize = 5;

// Flat next-season growth for every young player
pub const GROWTH_FACTOR: f64 = 1.20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectedStat {
    Points,
    Rebounds,
    Assists,
}

impl ProjectedStat {
    pub const ALL: [ProjectedStat; 3] = [
        ProjectedStat::Points,
        ProjectedStat::Rebounds,
        ProjectedStat::Assists,
    ];

    pub fn value(&self, row: &PlayerSeasonRecord) -> f64 {
        match self {
            ProjectedStat::Points => row.points,
            ProjectedStat::Rebounds => row.rebounds,
            ProjectedStat::Assists => row.assists,
        }
    }
}

pub fn project(current: f64) -> f64 {
    current * GROWTH_FACTOR
}

fn rank_stat(players: &[&PlayerSeasonRecord], stat: ProjectedStat) -> ConferenceSplit<ImproverProjection> {
    let mut split = ConferenceSplit::default();

    for conference in Conference::ALL {
        let mut projected: Vec<(&PlayerSeasonRecord, f64, f64)> = players
            .iter()
            .filter(|row| row.conference() == conference)
            .map(|&row| {
                let current = stat.value(row);
                (row, current, project(current))
            })
            .collect();
        projected.sort_by(|a, b| descending_nan_last(a.2, b.2));

        *split.get_mut(conference) = projected
            .into_iter()
            .take(IMPROVERS_PER_CONFERENCE)
            .map(|(row, current, projected)| ImproverProjection {
                name: row.name.clone(),
                team: row.team.clone(),
                current: round_to(current, 1),
                projected: round_to(projected, 1),
                player_id: row.player_id,
            })
            .collect();
    }

    split
}

pub fn rank_improvers(rows: &[PlayerSeasonRecord], season: &str) -> ImproverReport {
    let players = young_players(rows, IMPROVER_MAX_AGE);
    let [points, rebounds, assists] = ProjectedStat::ALL.map(|stat| rank_stat(&players, stat));

    ImproverReport {
        season: season.to_string(),
        points,
        rebounds,
        assists,
    }
}

pub fn improver_report(loader: &DataLoader, season: &str) -> Result<ImproverReport, AppError> {
    let rows = loader.load_season(season)?;
    if rows.is_empty() {
        return Err(AppError::NoPlayerData(season.to_string()));
    }
    Ok(rank_improvers(&rows, season))
}
