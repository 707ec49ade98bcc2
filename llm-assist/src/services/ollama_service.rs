//! Ollama service for local text generation.
//!
//! Non-streaming client around the Ollama HTTP API:
//! - POST {endpoint}/api/generate  (stream: false)
//!
//! No authentication. Vision requests are rejected up front since the
//! local models configured here are text-only.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        HttpError, LlmAssistError, Provider, ProviderError, ProviderErrorKind, make_snippet,
    },
};

/// Thin client for a local Ollama runtime.
#[derive(Debug)]
pub struct OllamaService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_generate: String,
}

impl OllamaService {
    /// Creates a new [`OllamaService`] from the given config.
    ///
    /// # Errors
    /// - [`ProviderErrorKind::InvalidProvider`] if `cfg.provider` is not Ollama
    /// - [`ProviderErrorKind::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`LlmAssistError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, LlmAssistError> {
        if cfg.provider != LlmProvider::Ollama {
            return Err(
                ProviderError::new(Provider::Ollama, ProviderErrorKind::InvalidProvider).into(),
            );
        }

        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ProviderError::new(
                Provider::Ollama,
                ProviderErrorKind::InvalidEndpoint(cfg.endpoint.clone()),
            )
            .into());
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(120));

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let url_generate = format!("{}/api/generate", endpoint.trim_end_matches('/'));

        info!(
            provider = ?cfg.provider,
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs.unwrap_or(120),
            "OllamaService initialized"
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
    /// - [`ProviderErrorKind::EmptyCandidates`] if the response text is empty
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmAssistError> {
        let started = Instant::now();
        let body = GenerateRequest {
            model: &self.cfg.model,
            prompt,
            stream: false,
            options: Options::from_cfg(&self.cfg),
        };

        debug!(
            model = %self.cfg.model,
            endpoint = %self.cfg.endpoint,
            "POST api/generate"
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
                "Ollama generate returned non-success status"
            );

            return Err(ProviderError::new(
                Provider::Ollama,
                ProviderErrorKind::HttpStatus(HttpError {
                    status,
                    url: self.url_generate.clone(),
                    snippet,
                }),
            )
            .into());
        }

        let out: GenerateResponse = resp.json().await.map_err(|e| {
            ProviderError::new(
                Provider::Ollama,
                ProviderErrorKind::Decode(format!("serde error: {e}; expected `response` field")),
            )
        })?;

        if out.response.is_empty() {
            return Err(
                ProviderError::new(Provider::Ollama, ProviderErrorKind::EmptyCandidates).into(),
            );
        }

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            "text generation completed"
        );

        Ok(out.response)
    }

    /// Image analysis is not available for the local text-only models.
    ///
    /// # Errors
    /// Always returns [`ProviderErrorKind::VisionUnsupported`].
    pub async fn generate_with_image(
        &self,
        _prompt: &str,
        _mime_type: &str,
        _data: &str,
    ) -> Result<String, LlmAssistError> {
        Err(ProviderError::new(Provider::Ollama, ProviderErrorKind::VisionUnsupported).into())
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Options>,
}

#[derive(Debug, Serialize)]
struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

impl Options {
    fn from_cfg(cfg: &LlmModelConfig) -> Option<Self> {
        if cfg.temperature.is_none() && cfg.top_p.is_none() && cfg.max_tokens.is_none() {
            return None;
        }
        Some(Self {
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            num_predict: cfg.max_tokens,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}
