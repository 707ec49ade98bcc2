use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON envelope shared by every route reply: `success` plus exactly one of
/// `data` or `error`.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Error payload. `field` and `hint` are only filled by the rejection-shaping
/// middleware, which can sometimes tell which request field broke parsing.
#[derive(Serialize)]
pub struct ApiError {
    /// Stable, machine-readable error code (e.g. "BAD_REQUEST").
    pub code: &'static str,
    /// Human-friendly error message.
    pub message: String,
    /// Request field the error points at, like `session_id` or `parts_count`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Optional hint to help the client fix the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Build a success envelope.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Build an error envelope with optional field context.
    pub fn error(
        code: &'static str,
        message: impl Into<String>,
        field: Option<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
                field,
                hint,
            }),
        }
    }

    /// Convert to axum Response.
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_error() {
        let env = ApiResponse::success(json!({"ok": true}));
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["success"], json!(true));
        assert_eq!(v["data"], json!({"ok": true}));
        assert!(v.get("error").is_none());
    }

    #[test]
    fn error_envelope_omits_absent_field_context() {
        let env = ApiResponse::<()>::error("BAD_REQUEST", "broken", None, None);
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["success"], json!(false));
        assert!(v.get("data").is_none());
        assert_eq!(v["error"]["code"], json!("BAD_REQUEST"));
        assert!(v["error"].get("field").is_none());
        assert!(v["error"].get("hint").is_none());
    }

    #[test]
    fn error_envelope_carries_field_context() {
        let env = ApiResponse::<()>::error(
            "UNPROCESSABLE_ENTITY",
            "invalid type",
            Some("parts_count".into()),
            Some("Expected a number.".into()),
        );
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["error"]["field"], json!("parts_count"));
        assert_eq!(v["error"]["hint"], json!("Expected a number."));
    }
}
