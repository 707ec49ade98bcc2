//! POST /predict/tyre_check — tyre photo condition check.
//!
//! Unlike the dashboard route this one does not degrade: a tyre verdict is
//! the whole point of the call, so vision failures surface as errors.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};
use llm_assist::extraction::{self, TYRE_PROMPT};
use tracing::info;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::predict::predict_request::{TyreCheckRequest, TyreCheckResponse},
};

/// Handler: POST /predict/tyre_check
pub async fn check_tyre(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TyreCheckRequest>,
) -> AppResult<Response> {
    if body.image_base64.trim().is_empty() {
        return Err(AppError::BadRequest("image_base64 must not be empty".into()));
    }

    let llm = state.llm.as_ref().ok_or(AppError::Http {
        status: StatusCode::SERVICE_UNAVAILABLE,
        code: "LLM_UNAVAILABLE",
        message: "No LLM backend is configured.".into(),
    })?;

    let raw = llm
        .describe_image(TYRE_PROMPT, &body.mime_type, &body.image_base64)
        .await?;
    let verdict = extraction::parse_tyre_reply(&raw)?;

    info!(condition = %verdict.condition, "tyre photo assessed");

    let recommendation = if verdict.is_defective() {
        "Replace this tyre before any long drive. Until then keep speeds low and check the pressure daily."
    } else {
        "The tyre looks serviceable. Keep up the usual pressure and tread checks."
    };

    Ok(ApiResponse::success(TyreCheckResponse {
        condition: verdict.condition.to_lowercase(),
        reason: verdict.reason,
        recommendation: recommendation.to_string(),
    })
    .into_response_with_status(StatusCode::OK))
}
