//! POST /chat/message — one conversation turn.
//!
//! The scripted flow answers on its own. When keyword detection cannot place
//! the complaint and an LLM chat backend is configured, the complaint goes
//! through the extraction prompt as a fallback before giving up.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};
use chat_engine::{BotReply, Stage};
use fault_kb::FaultCategory;
use llm_assist::extraction;
use tracing::{debug, info, warn};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::chat::chat_request::{ChatMessageRequest, ChatMessageResponse},
};

/// Handler: POST /chat/message
pub async fn chat_message(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatMessageRequest>,
) -> AppResult<Response> {
    let reply = {
        let mut sessions = state.sessions.write().await;
        let session = sessions
            .get_mut(&body.session_id)
            .ok_or(AppError::SessionNotFound)?;
        session.handle_message(&body.message)
    };

    // Keyword detection missed; try the LLM extractor before re-asking.
    let reply = if reply.stage == Stage::Clarification {
        match llm_category(&state, &body.message).await {
            Some(category) => {
                let mut sessions = state.sessions.write().await;
                let session = sessions
                    .get_mut(&body.session_id)
                    .ok_or(AppError::SessionNotFound)?;
                info!(%category, "category recovered via LLM extraction");
                session.begin_questions(category)
            }
            None => reply,
        }
    } else {
        reply
    };

    Ok(to_response(reply))
}

fn to_response(reply: BotReply) -> Response {
    ApiResponse::success(ChatMessageResponse {
        message: reply.message,
        stage: reply.stage,
        detected_category: reply.detected_category.map(|c| c.name().to_string()),
        diagnosis: reply.diagnosis,
    })
    .into_response_with_status(StatusCode::OK)
}

/// Best-effort LLM category extraction. Any failure degrades to `None`.
async fn llm_category(state: &AppState, message: &str) -> Option<FaultCategory> {
    let llm = state.llm.as_ref()?;

    let names: Vec<&str> = FaultCategory::ALL.iter().map(|c| c.name()).collect();
    let prompt = extraction::build_category_prompt(message, &names);

    let raw = match llm.generate_chat(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "category extraction call failed");
            return None;
        }
    };

    match extraction::parse_category_reply(&raw) {
        Ok(parsed) => {
            debug!(?parsed, "extraction reply parsed");
            parsed.category.as_deref().and_then(FaultCategory::parse)
        }
        Err(e) => {
            warn!(error = %e, "unparseable extraction reply");
            None
        }
    }
}
