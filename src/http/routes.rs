use axum::{Router, routing::get};

use crate::{
    http::handlers::{
        breakouts_handler, health_handler, improvers_handler, predict_handler,
        team_totals_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/predict", get(predict_handler))
        .route("/breakouts", get(breakouts_handler))
        .route("/improvers", get(improvers_handler))
        .route("/team-totals", get(team_totals_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}
