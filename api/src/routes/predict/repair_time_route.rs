//! POST /predict/repair_time — repair duration estimate.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};
use ml_serving::RepairTimeInput;
use tracing::info;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::predict::predict_request::{RepairTimeRequest, RepairTimeResponse},
};

/// Handler: POST /predict/repair_time
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/predict/repair_time \
///   -H 'content-type: application/json' \
///   -d '{"fault_category":"engine","fault_name":"Radiator failure","severity":"major","parts_count":2}'
/// ```
pub async fn predict_repair_time(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RepairTimeRequest>,
) -> AppResult<Response> {
    let predictor = state.repair_time.as_ref().ok_or(AppError::Http {
        status: StatusCode::SERVICE_UNAVAILABLE,
        code: "MODEL_UNAVAILABLE",
        message: "Repair time model is not loaded.".into(),
    })?;

    let estimate = predictor.predict(&RepairTimeInput {
        fault_category: body.fault_category,
        fault_name: body.fault_name,
        severity: body.severity,
        parts_count: body.parts_count,
    })?;

    info!(hours = estimate.hours, "repair time predicted");

    Ok(ApiResponse::success(RepairTimeResponse {
        estimated_repair_time: estimate.hours,
        formatted_time: estimate.display,
    })
    .into_response_with_status(StatusCode::OK))
}
