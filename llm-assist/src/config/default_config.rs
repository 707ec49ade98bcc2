//! Default LLM configs loaded strictly from environment variables.
//!
//! Convenience constructors for [`LlmModelConfig`], grouped by provider and
//! role. Two roles exist:
//!
//! - **Chat**   → free-text category extraction
//! - **Vision** → dashboard / tyre photo analysis (Gemini only)
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_KIND`       = provider kind (`gemini` | `ollama`), default `gemini`
//! - `LLM_MAX_TOKENS` = optional max tokens (u32)
//!
//! Gemini-specific:
//! - `GEMINI_API_KEY`      = API key (mandatory for Gemini)
//! - `GEMINI_MODEL`        = chat model, default `gemini-1.5-flash`
//! - `GEMINI_VISION_MODEL` = vision model, defaults to `GEMINI_MODEL`
//! - `GEMINI_URL`          = endpoint, default
//!   `https://generativelanguage.googleapis.com`
//!
//! Ollama-specific:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (mandatory)
//! - `OLLAMA_MODEL`                = model (mandatory)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{ConfigError, LlmAssistError, env_opt, env_opt_u32, must_env,
        validate_http_endpoint},
};

const GEMINI_DEFAULT_URL: &str = "https://generativelanguage.googleapis.com";
const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Resolves the Ollama endpoint strictly from environment.
///
/// Precedence: `OLLAMA_URL`, then `OLLAMA_PORT` → `http://localhost:{port}`.
fn ollama_endpoint() -> Result<String, LlmAssistError> {
    if let Some(url) = env_opt("OLLAMA_URL") {
        validate_http_endpoint("OLLAMA_URL", &url)?;
        return Ok(url);
    }
    if let Some(port) = env_opt("OLLAMA_PORT") {
        let _ = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: "OLLAMA_PORT",
                reason: "expected u16 (1..=65535)",
            })?;
        return Ok(format!("http://localhost:{port}"));
    }
    Err(ConfigError::MissingVar("OLLAMA_URL or OLLAMA_PORT").into())
}

/// Gemini chat config from environment.
pub fn gemini_chat() -> Result<LlmModelConfig, LlmAssistError> {
    let endpoint = env_opt("GEMINI_URL").unwrap_or_else(|| GEMINI_DEFAULT_URL.to_string());
    validate_http_endpoint("GEMINI_URL", &endpoint)?;
    Ok(LlmModelConfig {
        provider: LlmProvider::Gemini,
        model: env_opt("GEMINI_MODEL").unwrap_or_else(|| GEMINI_DEFAULT_MODEL.to_string()),
        endpoint,
        api_key: Some(must_env("GEMINI_API_KEY")?),
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        temperature: None,
        top_p: None,
        timeout_secs: Some(30),
    })
}

/// Gemini vision config; same endpoint/key as chat, model may differ.
pub fn gemini_vision() -> Result<LlmModelConfig, LlmAssistError> {
    let mut cfg = gemini_chat()?;
    if let Some(model) = env_opt("GEMINI_VISION_MODEL") {
        cfg.model = model;
    }
    Ok(cfg)
}

/// Ollama chat config from environment (local, text-only).
pub fn ollama_chat() -> Result<LlmModelConfig, LlmAssistError> {
    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model: must_env("OLLAMA_MODEL")?,
        endpoint: ollama_endpoint()?,
        api_key: None,
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        temperature: None,
        top_p: None,
        timeout_secs: Some(60),
    })
}

/// Builds the (chat, optional vision) config pair from `LLM_KIND`.
///
/// Gemini gets a vision profile; Ollama runs text-only and leaves vision
/// unset so the profile facade can report it unavailable.
pub fn profiles_from_env() -> Result<(LlmModelConfig, Option<LlmModelConfig>), LlmAssistError> {
    let kind = env_opt("LLM_KIND").unwrap_or_else(|| "gemini".to_string());
    match kind.to_ascii_lowercase().as_str() {
        "gemini" => Ok((gemini_chat()?, Some(gemini_vision()?))),
        "ollama" => Ok((ollama_chat()?, None)),
        other => Err(ConfigError::UnsupportedProvider(other.to_string()).into()),
    }
}
