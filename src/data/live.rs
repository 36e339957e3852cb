use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::AppConfig,
    errors::AppError,
    models::{Conference, SeasonId, player::MULTI_TEAM_CODE, team::TeamTotals},
};

#[async_trait]
pub trait TeamTotalsSource: Send + Sync {
    async fn fetch_team_totals(&self, season: &SeasonId) -> Result<Vec<TeamTotals>, AppError>;
}

// A failed fetch is logged and never fails the request
pub async fn fetch_live_totals(
    source: &dyn TeamTotalsSource,
    season: &SeasonId,
) -> Option<Vec<TeamTotals>> {
    match source.fetch_team_totals(season).await {
        Ok(teams) => {
            tracing::info!("Fetched live totals for {} teams in {}", teams.len(), season);
            Some(teams)
        }
        Err(e) => {
            tracing::warn!("Live team totals unavailable for {}: {}", season, e);
            None
        }
    }
}

pub struct HttpTeamTotalsSource {
    client: reqwest::Client,
    url: String,
    delay: std::time::Duration,
}

impl HttpTeamTotalsSource {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
            ),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.live_stats_timeout)
            .build()
            .map_err(|e| AppError::LiveStats(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.live_stats_url.clone(),
            delay: config.live_stats_delay,
        })
    }
}

#[async_trait]
impl TeamTotalsSource for HttpTeamTotalsSource {
    async fn fetch_team_totals(&self, season: &SeasonId) -> Result<Vec<TeamTotals>, AppError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let season = season.to_string();
        let res = self
            .client
            .get(&self.url)
            .query(&[
                ("LeagueID", "00"),
                ("Season", season.as_str()),
                ("SeasonType", "Regular Season"),
                ("PerMode", "Totals"),
                ("MeasureType", "Base"),
                ("PaceAdjust", "N"),
                ("PlusMinus", "N"),
                ("Rank", "N"),
                ("LastNGames", "0"),
                ("Month", "0"),
                ("OpponentTeamID", "0"),
                ("Period", "0"),
                ("TeamID", "0"),
            ])
            .send()
            .await
            .map_err(|e| AppError::LiveStats(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            return Err(AppError::LiveStats(format!(
                "Stats service returned {}",
                res.status()
            )));
        }

        let body = res
            .text()
            .await
            .map_err(|e| AppError::LiveStats(format!("Failed to read body: {}", e)))?;

        parse_team_totals(&body)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    result_sets: Vec<ResultSet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultSet {
    headers: Vec<String>,
    row_set: Vec<Vec<Value>>,
}

// First `{headers, rowSet}` table only; TOT rows dropped
pub fn parse_team_totals(body: &str) -> Result<Vec<TeamTotals>, AppError> {
    let response: StatsResponse = serde_json::from_str(body)
        .map_err(|e| AppError::LiveStats(format!("Invalid JSON response: {}", e)))?;

    let table = response
        .result_sets
        .into_iter()
        .next()
        .ok_or_else(|| AppError::LiveStats("Response has no result sets".into()))?;

    let column = |name: &str| {
        table
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| AppError::LiveStats(format!("Missing column {}", name)))
    };

    let team_idx = column("TEAM_ABBREVIATION")?;
    let pts_idx = column("PTS")?;
    let ast_idx = column("AST")?;
    let reb_idx = column("REB")?;
    let fg_idx = column("FG_PCT")?;
    let ft_idx = column("FT_PCT")?;

    let mut teams = Vec::with_capacity(table.row_set.len());
    for row in &table.row_set {
        let team = row
            .get(team_idx)
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::LiveStats("Row without team code".into()))?
            .to_string();

        if team == MULTI_TEAM_CODE {
            continue;
        }

        let number = |idx: usize| {
            row.get(idx)
                .and_then(Value::as_f64)
                .ok_or_else(|| AppError::LiveStats(format!("Non-numeric value for {}", team)))
        };

        teams.push(TeamTotals {
            conference: Conference::of(&team),
            points: number(pts_idx)?,
            assists: number(ast_idx)?,
            rebounds: number(reb_idx)?,
            fg_pct: number(fg_idx)?,
            ft_pct: number(ft_idx)?,
            team,
        });
    }

    Ok(teams)
}
