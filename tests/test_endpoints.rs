mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use common::{EAST, WEST, league, write_players};
use nba_outlook::{
    config::AppConfig,
    create_app,
    data::{TeamTotalsSource, live::parse_team_totals},
    errors::AppError,
    models::{Conference, SeasonId, team::TeamTotals},
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

const TRAINING_SEASONS: [&str; 7] = [
    "2016-17", "2017-18", "2018-19", "2019-20", "2020-21", "2021-22", "2022-23",
];

struct OfflineSource;

#[async_trait]
impl TeamTotalsSource for OfflineSource {
    async fn fetch_team_totals(&self, _season: &SeasonId) -> Result<Vec<TeamTotals>, AppError> {
        Err(AppError::LiveStats("connection refused".into()))
    }
}

struct FixedSource;

#[async_trait]
impl TeamTotalsSource for FixedSource {
    async fn fetch_team_totals(&self, _season: &SeasonId) -> Result<Vec<TeamTotals>, AppError> {
        Ok(vec![TeamTotals {
            team: "BOS".into(),
            conference: Conference::East,
            points: 9887.0,
            assists: 2198.0,
            rebounds: 3799.0,
            fg_pct: 0.487,
            ft_pct: 0.808,
        }])
    }
}

fn app_with(dir: &tempfile::TempDir, live: Arc<dyn TeamTotalsSource>) -> Router {
    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    create_app(AppState::new(config, live))
}

fn league_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut seasons: Vec<&str> = TRAINING_SEASONS.to_vec();
    seasons.push("2023-24");
    write_players(&dir.path().join("PlayerStats.csv"), &league(&seasons));
    dir
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_predict_rejects_season_without_suffix() {
    let dir = league_dir();
    let (status, body) = get_json(app_with(&dir, Arc::new(OfflineSource)), "/predict?season=2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "error": "Invalid season format" }));
}

#[tokio::test]
async fn test_predict_without_training_window() {
    let dir = league_dir();
    let (status, body) =
        get_json(app_with(&dir, Arc::new(OfflineSource)), "/predict?season=1980-81").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "No training data found");
}

#[tokio::test]
async fn test_predict_without_target_rows() {
    let dir = league_dir();
    // 2024-25 has a full training window but no rows of its own
    let (status, body) =
        get_json(app_with(&dir, Arc::new(OfflineSource)), "/predict?season=2024-25").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "No prediction data available");
}

#[tokio::test]
async fn test_predict_ranks_ten_per_conference() {
    let dir = league_dir();
    let (status, body) =
        get_json(app_with(&dir, Arc::new(OfflineSource)), "/predict?season=2023-24").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["season"], "2023-24");

    for (key, members) in [("East", EAST), ("West", WEST)] {
        let picks = body[key].as_array().unwrap();
        assert_eq!(picks.len(), 10, "{key}");

        let confidences: Vec<f64> = picks
            .iter()
            .map(|p| p["confidence"].as_f64().unwrap())
            .collect();
        assert!(confidences.iter().all(|c| (0.0..=100.0).contains(c)));
        assert!(confidences.windows(2).all(|w| w[0] >= w[1]), "{key}: {confidences:?}");

        for pick in picks {
            let team = pick["team"].as_str().unwrap();
            assert!(members.contains(&team), "{team} listed under {key}");
        }

        // The strongest team in each conference is a near-certain pick
        assert!(picks.iter().any(|p| p["team"] == members[0]));
    }
}

#[tokio::test]
async fn test_player_endpoints_without_data() {
    let dir = league_dir();

    for endpoint in ["breakouts", "improvers"] {
        let uri = format!("/{endpoint}?season=1990-91");
        let (status, body) = get_json(app_with(&dir, Arc::new(OfflineSource)), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "No player data for 1990-91");
    }

    // Malformed seasons are simply seasons with no rows here
    let (status, body) =
        get_json(app_with(&dir, Arc::new(OfflineSource)), "/breakouts?season=2024").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "No player data for 2024");
}

#[tokio::test]
async fn test_breakouts_shape() {
    let dir = league_dir();
    let (status, body) =
        get_json(app_with(&dir, Arc::new(OfflineSource)), "/breakouts?season=2023-24").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["season"], "2023-24");
    for key in ["East", "West"] {
        let players = body[key].as_array().unwrap();
        assert_eq!(players.len(), 5);
        for p in players {
            assert!(p["name"].is_string());
            assert!(p["team"].is_string());
            assert!(p["score"].is_number());
            assert!(p["playerId"].is_number());
        }
    }
}

#[tokio::test]
async fn test_improvers_shape() {
    let dir = league_dir();
    let (status, body) =
        get_json(app_with(&dir, Arc::new(OfflineSource)), "/improvers?season=2023-24").await;

    assert_eq!(status, StatusCode::OK);
    for stat in ["PTS", "REB", "AST"] {
        for key in ["East", "West"] {
            let players = body[stat][key].as_array().unwrap();
            assert_eq!(players.len(), 5, "{stat}/{key}");
            let first = &players[0];
            let current = first["current"].as_f64().unwrap();
            let projected = first["projected"].as_f64().unwrap();
            assert!((projected - current * 1.2).abs() < 0.1);
        }
    }
}

#[tokio::test]
async fn test_missing_historical_table_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) =
        get_json(app_with(&dir, Arc::new(OfflineSource)), "/predict?season=2023-24").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Data unavailable"));
}

#[tokio::test]
async fn test_team_totals_failure_is_null() {
    let dir = league_dir();
    let (status, body) =
        get_json(app_with(&dir, Arc::new(OfflineSource)), "/team-totals?season=2023-24").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["season"], "2023-24");
    assert!(body["teams"].is_null());
}

#[tokio::test]
async fn test_team_totals_success() {
    let dir = league_dir();
    let (status, body) =
        get_json(app_with(&dir, Arc::new(FixedSource)), "/team-totals?season=2023-24").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teams"][0]["team"], "BOS");
    assert_eq!(body["teams"][0]["conference"], "East");
    assert_eq!(body["teams"][0]["fgPct"], 0.487);
}

#[tokio::test]
async fn test_team_totals_invalid_season() {
    let dir = league_dir();
    let (status, body) =
        get_json(app_with(&dir, Arc::new(FixedSource)), "/team-totals?season=twenty").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "Invalid season format");
}

#[test]
fn test_parse_team_totals_table() {
    let body = r#"{
        "resource": "leaguedashteamstats",
        "resultSets": [{
            "name": "LeagueDashTeamStats",
            "headers": ["TEAM_ID", "TEAM_ABBREVIATION", "GP", "FG_PCT", "FT_PCT", "REB", "AST", "PTS"],
            "rowSet": [
                [1610612738, "BOS", 82, 0.487, 0.808, 3799, 2198, 9887],
                [1610612747, "LAL", 82, 0.497, 0.782, 3625, 2347, 9765],
                [0, "TOT", 82, 0.5, 0.8, 1, 1, 1]
            ]
        }]
    }"#;

    let teams = parse_team_totals(body).unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].team, "BOS");
    assert_eq!(teams[0].conference, Conference::East);
    assert_eq!(teams[0].points, 9887.0);
    assert_eq!(teams[0].rebounds, 3799.0);
    assert_eq!(teams[1].conference, Conference::West);
    assert_eq!(teams[1].assists, 2347.0);
}

#[test]
fn test_parse_team_totals_missing_column() {
    let body = r#"{"resultSets": [{"headers": ["TEAM_ID", "TEAM_NAME", "PTS"], "rowSet": []}]}"#;
    assert!(matches!(
        parse_team_totals(body),
        Err(AppError::LiveStats(_))
    ));
    assert!(matches!(parse_team_totals("not json"), Err(AppError::LiveStats(_))));
}
