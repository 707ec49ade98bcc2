use chat_engine::{Diagnosis, Stage};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request payload for /chat/start.
#[derive(Debug, Deserialize)]
pub struct ChatStartRequest {
    /// Name the bot greets the caller with; defaults to "driver".
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Response payload for /chat/start.
#[derive(Debug, Serialize)]
pub struct ChatStartResponse {
    pub session_id: Uuid,
    /// The opening greeting.
    pub message: String,
    pub stage: Stage,
}

/// Request payload for /chat/message.
#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub session_id: Uuid,
    /// Free-text user message.
    pub message: String,
}

/// Response payload for /chat/message.
#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub message: String,
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_category: Option<String>,
    /// Present once the stage reaches `diagnosis_complete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Diagnosis>,
}
