//! Unified error handling for `llm-assist`.
//!
//! One top-level [`LlmAssistError`] for the whole crate, with domain-specific
//! sub-enums for config problems and provider failures. Small helpers for
//! reading/validating environment variables return the unified [`Result`].
//!
//! All messages carry the `[LLM Assist]` prefix to simplify attribution in
//! logs.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, LlmAssistError>;

/// Top-level error for the `llm-assist` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LlmAssistError {
    /// Configuration/validation errors (startup/readiness).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Provider-side failures (HTTP status, decoding, empty output).
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Underlying HTTP transport error (e.g., `reqwest::Error`).
    #[error("[LLM Assist] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[LLM Assist] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (like ports, limits, timeouts).
    #[error("[LLM Assist] invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },

    /// Unsupported provider in `LLM_KIND`.
    #[error("[LLM Assist] unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[LLM Assist] invalid format in {var}: {reason}")]
    InvalidFormat {
        var: &'static str,
        reason: &'static str,
    },
}

/// Which backend produced a provider error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    Ollama,
}

/// A provider failure with its backend attached.
#[derive(Debug, Error)]
#[error("[LLM Assist] {provider:?}: {kind}")]
pub struct ProviderError {
    pub provider: Provider,
    pub kind: ProviderErrorKind,
}

impl ProviderError {
    pub fn new(provider: Provider, kind: ProviderErrorKind) -> Self {
        Self { provider, kind }
    }
}

/// The specific way a provider call went wrong.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderErrorKind {
    /// The config has an unexpected provider for this client.
    #[error("invalid provider for this client")]
    InvalidProvider,

    /// The provider requires an API key and none was configured.
    #[error("missing API key")]
    MissingApiKey,

    /// The endpoint is empty or does not start with http/https.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Upstream returned a non-successful HTTP status.
    #[error("HTTP {} from {}: {}", .0.status, .0.url, .0.snippet)]
    HttpStatus(HttpError),

    /// Response payload could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),

    /// The response carried no usable candidates/text.
    #[error("empty candidates in response")]
    EmptyCandidates,

    /// The configured provider cannot serve this request (e.g. image input
    /// on a text-only backend).
    #[error("vision input not supported by this provider")]
    VisionUnsupported,
}

/// Status/url/body-snippet triple for non-2xx upstream responses.
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub url: String,
    pub snippet: String,
}

/// Maximum body snippet length kept in error messages.
const SNIPPET_MAX: usize = 240;

/// Trims an upstream body to a short, single-line snippet for errors/logs.
pub fn make_snippet(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= SNIPPET_MAX {
        flat
    } else {
        let mut cut = SNIPPET_MAX;
        while !flat.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…", &flat[..cut])
    }
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Fetches a required, non-empty environment variable.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Fetches an optional environment variable (`None` if unset/empty).
pub fn env_opt(name: &'static str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
pub fn env_opt_u32(name: &'static str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u32>().map(Some).map_err(|_| {
            LlmAssistError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_is_flattened_and_bounded() {
        let s = make_snippet("line one\n   line\ttwo");
        assert_eq!(s, "line one line two");

        let long = "x".repeat(1000);
        assert!(make_snippet(&long).len() <= SNIPPET_MAX + '…'.len_utf8());
    }

    #[test]
    fn endpoint_validation() {
        assert!(validate_http_endpoint("GEMINI_URL", "https://example.com").is_ok());
        assert!(validate_http_endpoint("GEMINI_URL", "ftp://example.com").is_err());
    }
}
