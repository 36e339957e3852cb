use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    data::fetch_live_totals,
    errors::ErrorBody,
    http::handlers::SeasonQuery,
    models::{SeasonId, outlook::LiveTeamReport},
    state::AppState,
};

// A failed fetch yields `teams: null`
pub async fn team_totals_handler(
    State(state): State<AppState>,
    Query(query): Query<SeasonQuery>,
) -> Result<Json<LiveTeamReport>, (StatusCode, Json<ErrorBody>)> {
    let season = query.season.trim().to_string();
    let season_id = SeasonId::parse(&season).map_err(|e| e.to_response())?;

    let teams = fetch_live_totals(state.live.as_ref(), &season_id).await;

    Ok(Json(LiveTeamReport { season, teams }))
}
