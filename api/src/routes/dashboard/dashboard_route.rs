//! POST /chat/dashboard — dashboard photo analysis.
//!
//! The photo goes to the vision backend, the reported lights are matched
//! against the warning light reference table, and each recognized light adds
//! its symptom flag to the session. Vision failures degrade to an apology
//! instead of an error so the scripted flow can continue.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};
use fault_kb::warning_lights::{self, warning_light_by_name};
use llm_assist::extraction;
use tracing::{info, warn};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::dashboard::dashboard_request::{DashboardRequest, DashboardResponse, RecognizedLight},
};

const DEGRADED_MESSAGE: &str = "I couldn't analyze the dashboard photo right now. \
Could you tell me which warning lights you can see instead?";

/// Handler: POST /chat/dashboard
pub async fn analyze_dashboard(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DashboardRequest>,
) -> AppResult<Response> {
    if body.image_base64.trim().is_empty() {
        return Err(AppError::BadRequest("image_base64 must not be empty".into()));
    }

    let analysis = match run_vision(&state, &body).await {
        Some(analysis) => analysis,
        None => {
            return Ok(ApiResponse::success(DashboardResponse {
                analyzed: false,
                message: DEGRADED_MESSAGE.to_string(),
                lights: Vec::new(),
                unrecognized: Vec::new(),
            })
            .into_response_with_status(StatusCode::OK));
        }
    };

    let mut lights = Vec::new();
    let mut unrecognized = Vec::new();
    for detected in &analysis.warning_lights {
        match warning_light_by_name(&detected.name) {
            Some(known) => lights.push(RecognizedLight {
                name: known.name.to_string(),
                color: known.color.to_string(),
                meaning: known.meaning.to_string(),
                symptom: known.symptom.to_string(),
            }),
            None => unrecognized.push(detected.name.clone()),
        }
    }

    // Feed the session, when one was named.
    if let Some(session_id) = body.session_id {
        let mut sessions = state.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(AppError::SessionNotFound)?;
        for light in &lights {
            session.note_symptom(light.symptom.clone());
        }
        if session.category().is_none() {
            if let Some(first) = lights.first() {
                if let Some(known) = warning_light_by_name(&first.name) {
                    session.set_category(known.category);
                }
            }
        }
    }

    info!(
        recognized = lights.len(),
        unrecognized = unrecognized.len(),
        "dashboard photo analyzed"
    );

    let message = if lights.is_empty() {
        format!(
            "I couldn't match any warning lights in the photo. {}",
            analysis.summary
        )
    } else {
        let names: Vec<&str> = lights.iter().map(|l| l.name.as_str()).collect();
        format!("I can see these warning lights: {}.", names.join(", "))
    };

    Ok(ApiResponse::success(DashboardResponse {
        analyzed: true,
        message,
        lights,
        unrecognized,
    })
    .into_response_with_status(StatusCode::OK))
}

/// Calls the vision backend and parses its reply; failures degrade to `None`.
async fn run_vision(
    state: &AppState,
    body: &DashboardRequest,
) -> Option<extraction::DashboardAnalysis> {
    let llm = state.llm.as_ref()?;
    if !llm.has_vision() {
        warn!("dashboard photo received but no vision backend is configured");
        return None;
    }

    let names: Vec<&str> = warning_lights::all().iter().map(|w| w.name).collect();
    let prompt = extraction::build_dashboard_prompt(&names);

    let raw = match llm
        .describe_image(&prompt, &body.mime_type, &body.image_base64)
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "dashboard vision call failed");
            return None;
        }
    };

    match extraction::parse_dashboard_reply(&raw) {
        Ok(analysis) => Some(analysis),
        Err(e) => {
            warn!(error = %e, "unparseable dashboard reply");
            None
        }
    }
}
