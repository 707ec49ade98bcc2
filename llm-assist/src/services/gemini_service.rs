//! Gemini service for text generation and image analysis.
//!
//! Minimal, non-streaming client around the Gemini REST API:
//! - POST {endpoint}/v1beta/models/{model}:generateContent
//!
//! Authentication is a `key` query parameter. Image input travels as an
//! inline base64 part next to the text prompt, which is how the dashboard
//! and tyre photos reach the model.
//!
//! Constructor validation:
//! - `cfg.provider` must be `LlmProvider::Gemini`
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://
//!
//! Errors are normalized via the unified types in `error_handler`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        HttpError, LlmAssistError, Provider, ProviderError, ProviderErrorKind, make_snippet,
    },
};

/// Thin client for the Gemini API.
///
/// Constructed from a complete [`LlmModelConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` with a timeout.
///
/// High-level operations:
/// - [`GeminiService::generate`]            — text-only generation
/// - [`GeminiService::generate_with_image`] — prompt + inline base64 image
#[derive(Debug)]
pub struct GeminiService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_generate: String,
}

impl GeminiService {
    /// Creates a new [`GeminiService`] from the given config.
    ///
    /// # Errors
    /// - [`ProviderErrorKind::InvalidProvider`] if `cfg.provider` is not Gemini
    /// - [`ProviderErrorKind::MissingApiKey`] if `cfg.api_key` is `None`
    /// - [`ProviderErrorKind::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`LlmAssistError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, LlmAssistError> {
        if cfg.provider != LlmProvider::Gemini {
            return Err(
                ProviderError::new(Provider::Gemini, ProviderErrorKind::InvalidProvider).into(),
            );
        }

        let api_key = cfg.api_key.clone().ok_or_else(|| {
            ProviderError::new(Provider::Gemini, ProviderErrorKind::MissingApiKey)
        })?;

        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ProviderError::new(
                Provider::Gemini,
                ProviderErrorKind::InvalidEndpoint(cfg.endpoint.clone()),
            )
            .into());
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_generate = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            base, cfg.model, api_key
        );

        info!(
            provider = ?cfg.provider,
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs.unwrap_or(60),
            "GeminiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    /// Performs a text-only generation request.
    ///
    /// # Errors
    /// - [`ProviderErrorKind::HttpStatus`] for non-2xx responses
    /// - [`LlmAssistError::HttpTransport`] for client/network failures
    /// - [`ProviderErrorKind::Decode`] if the JSON cannot be parsed
    /// - [`ProviderErrorKind::EmptyCandidates`] if no text comes back
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmAssistError> {
        let parts = vec![Part::text(prompt)];
        self.generate_parts(parts, "text generation").await
    }

    /// Performs a generation request with the prompt plus one inline image.
    ///
    /// `data` is the base64-encoded image body; `mime_type` is e.g.
    /// `image/jpeg`.
    pub async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        data: &str,
    ) -> Result<String, LlmAssistError> {
        let parts = vec![Part::text(prompt), Part::inline_image(mime_type, data)];
        self.generate_parts(parts, "vision generation").await
    }

    async fn generate_parts(
        &self,
        parts: Vec<Part<'_>>,
        what: &'static str,
    ) -> Result<String, LlmAssistError> {
        let started = Instant::now();
        let body = GenerateContentRequest::from_cfg(&self.cfg, parts);

        debug!(
            model = %self.cfg.model,
            endpoint = %self.cfg.endpoint,
            "POST generateContent ({what})"
        );

        let resp = self
            .client
            .post(&self.url_generate)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %snippet,
                model = %self.cfg.model,
                endpoint = %self.cfg.endpoint,
                latency_ms = started.elapsed().as_millis(),
                "Gemini generateContent returned non-success status"
            );

            return Err(ProviderError::new(
                Provider::Gemini,
                ProviderErrorKind::HttpStatus(HttpError {
                    status,
                    // The key query param stays out of errors and logs.
                    url: format!("{}/v1beta/models/{}:generateContent", self.cfg.endpoint, self.cfg.model),
                    snippet,
                }),
            )
            .into());
        }

        let out: GenerateContentResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode generateContent response"
                );
                return Err(ProviderError::new(
                    Provider::Gemini,
                    ProviderErrorKind::Decode(format!(
                        "serde error: {e}; expected `candidates[0].content.parts[].text`"
                    )),
                )
                .into());
            }
        };

        let text = out
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ProviderError::new(Provider::Gemini, ProviderErrorKind::EmptyCandidates)
            })?;

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            "{what} completed"
        );

        Ok(text)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_cfg(cfg: &LlmModelConfig, parts: Vec<Part<'a>>) -> Self {
        let generation_config = if cfg.temperature.is_some()
            || cfg.top_p.is_some()
            || cfg.max_tokens.is_some()
        {
            Some(GenerationConfig {
                temperature: cfg.temperature,
                top_p: cfg.top_p,
                max_output_tokens: cfg.max_tokens,
            })
        } else {
            None
        };
        Self {
            contents: vec![Content { parts }],
            generation_config,
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// One content part: either text or an inline base64 image.
#[derive(Debug, Serialize)]
struct Part<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(rename = "inline_data", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
}

impl<'a> Part<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            text: Some(text),
            inline_data: None,
        }
    }

    fn inline_image(mime_type: &'a str, data: &'a str) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData { mime_type, data }),
        }
    }
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    #[serde(rename = "mime_type")]
    mime_type: &'a str,
    data: &'a str,
}

/// Minimal response for `generateContent`.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
