//! HTTP surface for the diagnostic service.
//!
//! Routes:
//! - `POST /chat/start`          — open a session, get the greeting
//! - `POST /chat/message`        — one conversation turn
//! - `POST /chat/dashboard`      — dashboard photo analysis into the session
//! - `POST /predict/repair_time` — repair duration estimate
//! - `POST /predict/part_price`  — part price estimate
//! - `POST /predict/tyre_check`  — tyre photo condition check
//! - `GET  /health`              — backend and artifact status

use std::env;
use std::sync::Arc;

pub mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::{info, warn};

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        chat::{chat_message_route::chat_message, chat_start_route::chat_start},
        dashboard::dashboard_route::analyze_dashboard,
        health::health_route::health,
        predict::{
            part_price_route::predict_part_price, repair_time_route::predict_repair_time,
            tyre_check_route::check_tyre,
        },
    },
};

/// Binds `API_ADDRESS` and serves until Ctrl+C.
///
/// # Errors
/// [`AppError::MissingEnv`] when `API_ADDRESS` is unset, bind and serve
/// failures otherwise.
pub async fn start() -> Result<(), AppError> {
    let host_url = env::var("API_ADDRESS").map_err(|_| AppError::MissingEnv("API_ADDRESS"))?;

    let state = Arc::new(AppState::from_env());

    let app = Router::new()
        .route("/chat/start", post(chat_start))
        .route("/chat/message", post(chat_message))
        .route("/chat/dashboard", post(analyze_dashboard))
        .route("/predict/repair_time", post(predict_repair_time))
        .route("/predict/part_price", post(predict_part_price))
        .route("/predict/tyre_check", post(check_tyre))
        .route("/health", get(health))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;

    info!(%host_url, "diagnostic API listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}
