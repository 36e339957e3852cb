use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    analytics::{breakouts::breakout_report, improvers::improver_report},
    errors::ErrorBody,
    http::handlers::{SeasonQuery, log_failure, run_pipeline},
    models::outlook::{BreakoutReport, ImproverReport},
    state::AppState,
};

pub async fn breakouts_handler(
    State(state): State<AppState>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<BreakoutReport>, (StatusCode, Json<ErrorBody>)> {
    let season = query.season.trim().to_string();
    let loader = state.loader.clone();

    let job_season = season.clone();
    let report = run_pipeline(move || breakout_report(&loader, &job_season))
        .await
        .map_err(|e| {
            log_failure("breakouts", &season, &e);
            e.to_response()
        })?;

    tracing::info!("Ranked breakout players for {}", season);
    Ok(Json(report))
}

pub async fn improvers_handler(
    State(state): State<AppState>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<ImproverReport>, (StatusCode, Json<ErrorBody>)> {
    let season = query.season.trim().to_string();
    let loader = state.loader.clone();

    let job_season = season.clone();
    let report = run_pipeline(move || improver_report(&loader, &job_season))
        .await
        .map_err(|e| {
            log_failure("improvers", &season, &e);
            e.to_response()
        })?;

    tracing::info!("Projected improvers for {}", season);
    Ok(Json(report))
}
