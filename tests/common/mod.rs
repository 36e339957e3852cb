#![allow(dead_code)]

use std::{fs, path::Path};

use nba_outlook::models::PlayerSeasonRecord;

pub const EAST: [&str; 15] = [
    "BOS", "MIL", "PHI", "NYK", "MIA", "ATL", "CHI", "TOR", "IND", "CLE", "WAS", "CHA", "DET",
    "ORL", "BKN",
];

pub const WEST: [&str; 15] = [
    "LAL", "GSW", "DEN", "PHX", "DAL", "MEM", "SAC", "MIN", "OKC", "LAC", "NOP", "UTA", "POR",
    "HOU", "SAS",
];

pub const HEADER: &str =
    "PLAYER_ID,Name,PLAYER_AGE,TEAM_ABBREVIATION,SEASON_ID,GP,MIN,PTS,AST,REB,STL,FG_PCT,FT_PCT";

pub fn player(id: i64, team: &str, season: &str, points: f64) -> PlayerSeasonRecord {
    PlayerSeasonRecord {
        player_id: id,
        name: format!("Player {}", id),
        age: 24.0,
        team: team.to_string(),
        season: season.to_string(),
        games_played: 70.0,
        minutes: 30.0,
        points,
        assists: 5.0,
        rebounds: 6.0,
        steals: 1.0,
        fg_pct: Some(0.47),
        ft_pct: Some(0.80),
    }
}

pub fn csv_line(row: &PlayerSeasonRecord) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{}",
        row.player_id,
        row.name,
        row.age,
        row.team,
        row.season,
        row.games_played,
        row.minutes,
        row.points,
        row.assists,
        row.rebounds,
        row.steals,
        row.fg_pct.map(|v| v.to_string()).unwrap_or_default(),
        row.ft_pct.map(|v| v.to_string()).unwrap_or_default(),
    )
}

pub fn write_players(path: &Path, rows: &[PlayerSeasonRecord]) {
    let mut body = String::from(HEADER);
    body.push('\n');
    for row in rows {
        body.push_str(&csv_line(row));
        body.push('\n');
    }
    fs::write(path, body).unwrap();
}

/// Two players per team for every listed season; team strength falls with
/// its position in the conference list.
pub fn league(seasons: &[&str]) -> Vec<PlayerSeasonRecord> {
    let mut rows = Vec::new();
    let mut id = 1;
    for season in seasons {
        for (rank, team) in EAST.iter().chain(WEST.iter()).enumerate() {
            let strength = 30.0 - (rank % 15) as f64;
            for _ in 0..2 {
                rows.push(player(id, team, season, strength * 40.0));
                id += 1;
            }
        }
    }
    rows
}
