use axum::{Json, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid season format")]
    InvalidSeasonFormat,

    #[error("No training data found")]
    NoTrainingData,

    #[error("No prediction data available")]
    NoPredictionData,

    #[error("No player data for {0}")]
    NoPlayerData(String),

    #[error("Data unavailable at {path}: {reason}")]
    DataUnavailable { path: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Live stats error: {0}")]
    LiveStats(String),

    #[error("Internal server error")]
    InternalError,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    // Domain misses are 200 with an `error` body
    pub fn to_response(&self) -> (StatusCode, Json<ErrorBody>) {
        let status = match self {
            AppError::InvalidSeasonFormat
            | AppError::NoTrainingData
            | AppError::NoPredictionData
            | AppError::NoPlayerData(_) => StatusCode::OK,
            AppError::DataUnavailable { .. } | AppError::Csv(_) | AppError::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::LiveStats(_) => StatusCode::BAD_GATEWAY,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
    }
}
