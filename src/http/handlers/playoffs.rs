use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    analytics::predictor::playoff_outlook,
    errors::ErrorBody,
    http::handlers::{SeasonQuery, log_failure, run_pipeline},
    models::{Conference, outlook::PlayoffOutlook},
    state::AppState,
};

pub async fn predict_handler(
    State(state): State<AppState>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<PlayoffOutlook>, (StatusCode, Json<ErrorBody>)> {
    let season = query.season.trim().to_string();
    let loader = state.loader.clone();

    let job_season = season.clone();
    let outlook = run_pipeline(move || playoff_outlook(&loader, &job_season))
        .await
        .map_err(|e| {
            log_failure("predict", &season, &e);
            e.to_response()
        })?;

    tracing::info!(
        "Predicted playoff field for {}: {} East, {} West",
        season,
        outlook.conferences.get(Conference::East).len(),
        outlook.conferences.get(Conference::West).len()
    );
    Ok(Json(outlook))
}
