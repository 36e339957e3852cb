pub mod players;
pub mod playoffs;
pub mod team_totals;

use serde::Deserialize;

use crate::errors::AppError;

pub use players::{breakouts_handler, improvers_handler};
pub use playoffs::predict_handler;
pub use team_totals::team_totals_handler;

#[derive(Debug, Deserialize)]
pub struct SeasonQuery {
    pub season: String,
}

pub async fn health_handler() -> &'static str {
    "ok"
}

pub(crate) async fn run_pipeline<T, F>(job: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(job).await.map_err(|e| {
        tracing::error!("Pipeline task failed: {}", e);
        AppError::InternalError
    })?
}

pub(crate) fn log_failure(endpoint: &str, season: &str, err: &AppError) {
    match err {
        AppError::DataUnavailable { .. } | AppError::Csv(_) | AppError::InternalError => {
            tracing::error!("{} failed for {}: {}", endpoint, season, err)
        }
        _ => tracing::warn!("{} returned no result for {}: {}", endpoint, season, err),
    }
}
