use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use llm_assist::error_handler::{LlmAssistError, ProviderErrorKind};
use ml_serving::MlServingError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("session not found")]
    SessionNotFound,

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // startup-only
            AppError::MissingEnv(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::SessionNotFound => StatusCode::NOT_FOUND,

            // custom mapped
            AppError::Http { status, .. } => *status,

            // 5xx
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "MISSING_ENV",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::SessionNotFound => "SESSION_NOT_FOUND",
            AppError::Http { code, .. } => code,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert common Axum rejections to `AppError`.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(err: axum::extract::rejection::QueryRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Convert `LlmAssistError` to `AppError::Http` with precise HTTP status & code.
///
/// Upstream provider failures surface as 502, a vision request against a
/// text-only backend as 400, and config problems as 500.
impl From<LlmAssistError> for AppError {
    fn from(err: LlmAssistError) -> Self {
        match &err {
            LlmAssistError::Provider(provider) => match &provider.kind {
                ProviderErrorKind::VisionUnsupported => AppError::Http {
                    status: StatusCode::BAD_REQUEST,
                    code: "VISION_UNSUPPORTED",
                    message: "Image analysis is not available with the configured model.".into(),
                },
                ProviderErrorKind::HttpStatus(_) => AppError::Http {
                    status: StatusCode::BAD_GATEWAY,
                    code: "LLM_UPSTREAM_ERROR",
                    message: err.to_string(),
                },
                ProviderErrorKind::Decode(_) | ProviderErrorKind::EmptyCandidates => {
                    AppError::Http {
                        status: StatusCode::BAD_GATEWAY,
                        code: "LLM_BAD_REPLY",
                        message: err.to_string(),
                    }
                }
                _ => AppError::Http {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    code: "LLM_CONFIG_ERROR",
                    message: err.to_string(),
                },
            },
            LlmAssistError::HttpTransport(_) => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "LLM_UNREACHABLE",
                message: err.to_string(),
            },
            _ => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "LLM_CONFIG_ERROR",
                message: err.to_string(),
            },
        }
    }
}

/// Convert `MlServingError` to `AppError::Http`. Bad inputs are the
/// caller's fault; everything else means a broken artifact.
impl From<MlServingError> for AppError {
    fn from(err: MlServingError) -> Self {
        match &err {
            MlServingError::MissingInput(_) => AppError::Http {
                status: StatusCode::BAD_REQUEST,
                code: "MISSING_FEATURE",
                message: err.to_string(),
            },
            _ => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "MODEL_ERROR",
                message: err.to_string(),
            },
        }
    }
}
