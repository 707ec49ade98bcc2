use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_mime() -> String {
    "image/jpeg".to_string()
}

/// Request payload for /chat/dashboard.
#[derive(Debug, Deserialize)]
pub struct DashboardRequest {
    /// Session to feed the detected symptoms into, if any.
    #[serde(default)]
    pub session_id: Option<Uuid>,
    /// Base64-encoded photo of the instrument cluster.
    pub image_base64: String,
    #[serde(default = "default_mime")]
    pub mime_type: String,
}

/// One light recognized against the reference table.
#[derive(Debug, Serialize)]
pub struct RecognizedLight {
    pub name: String,
    pub color: String,
    pub meaning: String,
    /// Symptom flag noted on the session.
    pub symptom: String,
}

/// Response payload for /chat/dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// False when the vision backend was unavailable or failed.
    pub analyzed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lights: Vec<RecognizedLight>,
    /// Light names the model reported but the reference table does not know.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unrecognized: Vec<String>,
}
