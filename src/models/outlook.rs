use serde::Serialize;

use crate::models::{Conference, team::TeamTotals};

// Serialized as {"East": [...], "West": [...]}
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConferenceSplit<T> {
    #[serde(rename = "East")]
    pub east: Vec<T>,
    #[serde(rename = "West")]
    pub west: Vec<T>,
}

impl<T> ConferenceSplit<T> {
    pub fn get(&self, conference: Conference) -> &[T] {
        match conference {
            Conference::East => &self.east,
            Conference::West => &self.west,
        }
    }

    pub fn get_mut(&mut self, conference: Conference) -> &mut Vec<T> {
        match conference {
            Conference::East => &mut self.east,
            Conference::West => &mut self.west,
        }
    }
}

impl<T> Default for ConferenceSplit<T> {
    fn default() -> Self {
        Self {
            east: Vec::new(),
            west: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayoffPick {
    pub team: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayoffOutlook {
    pub season: String,
    #[serde(flatten)]
    pub conferences: ConferenceSplit<PlayoffPick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakoutPlayer {
    pub name: String,
    pub team: String,
    pub score: f64,
    pub player_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakoutReport {
    pub season: String,
    #[serde(flatten)]
    pub conferences: ConferenceSplit<BreakoutPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproverProjection {
    pub name: String,
    pub team: String,
    pub current: f64,
    pub projected: f64,
    pub player_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImproverReport {
    pub season: String,
    #[serde(rename = "PTS")]
    pub points: ConferenceSplit<ImproverProjection>,
    #[serde(rename = "REB")]
    pub rebounds: ConferenceSplit<ImproverProjection>,
    #[serde(rename = "AST")]
    pub assists: ConferenceSplit<ImproverProjection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveTeamReport {
    pub season: String,
    pub teams: Option<Vec<TeamTotals>>,
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
