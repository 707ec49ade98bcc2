//! GET /health — service, backend and artifact status.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use llm_assist::health_service::HealthStatus;
use serde::Serialize;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

/// Response payload for /health.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// Probe results per configured LLM backend; absent when none is set up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<Vec<HealthStatus>>,
    pub models: ModelStatus,
    pub active_sessions: usize,
}

#[derive(Debug, Serialize)]
pub struct ModelStatus {
    pub repair_time: bool,
    pub part_price: bool,
}

/// Handler: GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let llm = match &state.llm {
        Some(profiles) => Some(profiles.health_all().await),
        None => None,
    };

    let report = HealthReport {
        llm,
        models: ModelStatus {
            repair_time: state.repair_time.is_some(),
            part_price: state.part_price.is_some(),
        },
        active_sessions: state.sessions.read().await.len(),
    };

    ApiResponse::success(report).into_response_with_status(StatusCode::OK)
}
