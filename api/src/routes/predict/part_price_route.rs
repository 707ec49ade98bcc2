//! POST /predict/part_price — replacement part price estimate.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};
use ml_serving::PartPriceInput;
use tracing::info;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::predict::predict_request::{PartPriceRequest, PartPriceResponse},
};

/// Handler: POST /predict/part_price
pub async fn predict_part_price(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PartPriceRequest>,
) -> AppResult<Response> {
    let predictor = state.part_price.as_ref().ok_or(AppError::Http {
        status: StatusCode::SERVICE_UNAVAILABLE,
        code: "MODEL_UNAVAILABLE",
        message: "Part price model is not loaded.".into(),
    })?;

    let predicted_cost = predictor.predict(&PartPriceInput {
        fault_category: body.fault_category,
        fault_code: body.fault_code,
        region: body.region,
        parts_cost: body.parts_cost,
    })?;

    info!(predicted_cost, "part price predicted");

    Ok(
        ApiResponse::success(PartPriceResponse { predicted_cost })
            .into_response_with_status(StatusCode::OK),
    )
}
