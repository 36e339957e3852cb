use serde::Deserialize;

use crate::models::Conference;

// Multi-team aggregate row a traded player gets on top of one row per stint
pub const MULTI_TEAM_CODE: &str = "TOT";

// Counting stats are NaN when the export left the cell blank
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeasonRecord {
    pub player_id: i64,
    pub name: String,
    pub age: f64,
    pub team: String,
    pub season: String,
    pub games_played: f64,
    pub minutes: f64,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub steals: f64,
    pub fg_pct: Option<f64>,
    pub ft_pct: Option<f64>,
}

impl PlayerSeasonRecord {
    pub fn is_multi_team(&self) -> bool {
        self.team == MULTI_TEAM_CODE
    }

    pub fn has_played(&self) -> bool {
        self.games_played > 0.0 && self.minutes > 0.0
    }

    pub fn conference(&self) -> Conference {
        Conference::of(&self.team)
    }
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub(crate) struct RawPlayerRow {
    PLAYER_ID: i64,
    #[serde(alias = "PLAYER_NAME")]
    Name: String,
    PLAYER_AGE: f64,
    TEAM_ABBREVIATION: String,
    #[serde(default)]
    SEASON_ID: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    GP: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    MIN: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    PTS: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    AST: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    REB: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    STL: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    FG_PCT: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    FT_PCT: Option<f64>,
}

impl RawPlayerRow {
    pub(crate) fn into_record(self, fallback_season: Option<&str>) -> PlayerSeasonRecord {
        let season = self
            .SEASON_ID
            .filter(|s| !s.trim().is_empty())
            .or_else(|| fallback_season.map(str::to_string))
            .unwrap_or_default();

        PlayerSeasonRecord {
            player_id: self.PLAYER_ID,
            name: self.Name.trim().to_string(),
            age: self.PLAYER_AGE,
            team: self.TEAM_ABBREVIATION.trim().to_string(),
            season: season.trim().to_string(),
            games_played: self.GP.unwrap_or(f64::NAN),
            minutes: self.MIN.unwrap_or(f64::NAN),
            points: self.PTS.unwrap_or(f64::NAN),
            assists: self.AST.unwrap_or(f64::NAN),
            rebounds: self.REB.unwrap_or(f64::NAN),
            steals: self.STL.unwrap_or(f64::NAN),
            fg_pct: self.FG_PCT.filter(|v| v.is_finite()),
            ft_pct: self.FT_PCT.filter(|v| v.is_finite()),
        }
    }
}
