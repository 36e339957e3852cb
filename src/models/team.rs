use serde::Serialize;

use crate::models::Conference;

pub const FEATURE_COUNT: usize = 5;

/// `[points, assists, rebounds, fg%, ft%]`, raw scale.
pub type FeatureVector = [f64; FEATURE_COUNT];

#[derive(Debug, Clone, PartialEq)]
pub struct TeamSeasonAggregate {
    pub team: String,
    /// `None` when the rows were grouped by team only.
    pub season: Option<String>,
    pub conference: Conference,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub fg_pct: f64,
    pub ft_pct: f64,
    pub success: bool,
}

impl TeamSeasonAggregate {
    pub fn features(&self) -> FeatureVector {
        [
            self.points,
            self.assists,
            self.rebounds,
            self.fg_pct,
            self.ft_pct,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTotals {
    pub team: String,
    pub conference: Conference,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub fg_pct: f64,
    pub ft_pct: f64,
}
