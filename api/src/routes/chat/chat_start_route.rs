//! POST /chat/start — opens a diagnostic session.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};
use chat_engine::ChatSession;
use tracing::info;
use uuid::Uuid;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    routes::chat::chat_request::{ChatStartRequest, ChatStartResponse},
};

/// Handler: POST /chat/start
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/chat/start \
///   -H 'content-type: application/json' \
///   -d '{"user_name":"Kavindu"}'
/// ```
pub async fn chat_start(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatStartRequest>,
) -> Response {
    let user_name = body
        .user_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("driver");
    let (session, greeting) = ChatSession::start(user_name);
    let session_id = Uuid::new_v4();

    state.sessions.write().await.insert(session_id, session);
    info!(%session_id, "chat session opened");

    ApiResponse::success(ChatStartResponse {
        session_id,
        message: greeting.message,
        stage: greeting.stage,
    })
    .into_response_with_status(StatusCode::OK)
}
