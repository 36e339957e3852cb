pub mod analytics;
pub mod config;
pub mod data;
pub mod errors;
mod http;
mod middleware;
pub mod models;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use config::AppConfig;
use data::HttpTeamTotalsSource;
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use state::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub fn create_app(state: AppState) -> Router {
    let global_rate_limiter = create_global_rate_limiter(state.config.rate_limit_per_minute);
    let cors = cors_layer(&state.config);

    Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .fallback(|| async { "404 Not Found" })
}

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!("Reading player data from {}", config.data_dir.display());

    let live = match HttpTeamTotalsSource::new(&config) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("Failed to initialize live stats source: {}", e);
            return;
        }
    };

    let port = config.port;
    let state = AppState::new(config, Arc::new(live));
    let app = create_app(state);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind port {}: {}", port, e);
            return;
        }
    };

    tracing::info!("NBA outlook API running at http://0.0.0.0:{port}");

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!("Server error: {}", e);
    }
}
