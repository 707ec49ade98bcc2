//! Reachability probes for configured LLM backends.
//!
//! A health check never returns `Err`: failures are folded into the
//! [`HealthStatus`] payload so the caller can report all backends in one
//! pass without short-circuiting.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};

/// Outcome of probing one configured backend.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub provider: String,
    pub endpoint: String,
    pub model: String,
    pub ok: bool,
    pub latency_ms: u128,
    /// Human-readable detail; `"ok"` on success, error text otherwise.
    pub message: String,
}

/// Probes one backend with a lightweight GET.
///
/// Gemini: `GET {endpoint}/v1beta/models?key={api_key}`.
/// Ollama: `GET {endpoint}/api/tags`.
pub async fn check(cfg: &LlmModelConfig) -> HealthStatus {
    let started = Instant::now();
    let provider = format!("{:?}", cfg.provider).to_lowercase();

    let url = match probe_url(cfg) {
        Ok(url) => url,
        Err(message) => {
            return HealthStatus {
                provider,
                endpoint: cfg.endpoint.clone(),
                model: cfg.model.clone(),
                ok: false,
                latency_ms: started.elapsed().as_millis(),
                message,
            };
        }
    };

    let outcome = async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        let resp = client.get(&url).send().await?;
        Ok::<_, reqwest::Error>(resp.status())
    }
    .await;

    let (ok, message) = match outcome {
        Ok(status) if status.is_success() => (true, "ok".to_string()),
        Ok(status) => (false, format!("unexpected status {status}")),
        Err(e) => (false, format!("request failed: {e}")),
    };

    let latency_ms = started.elapsed().as_millis();
    if ok {
        info!(%provider, endpoint = %cfg.endpoint, latency_ms, "backend healthy");
    } else {
        warn!(%provider, endpoint = %cfg.endpoint, latency_ms, %message, "backend unhealthy");
    }

    HealthStatus {
        provider,
        endpoint: cfg.endpoint.clone(),
        model: cfg.model.clone(),
        ok,
        latency_ms,
        message,
    }
}

/// Probes each config in order; never fails.
pub async fn check_many(cfgs: &[&LlmModelConfig]) -> Vec<HealthStatus> {
    let mut out = Vec::with_capacity(cfgs.len());
    for cfg in cfgs {
        out.push(check(cfg).await);
    }
    out
}

fn probe_url(cfg: &LlmModelConfig) -> Result<String, String> {
    let base = cfg.endpoint.trim_end_matches('/');
    match cfg.provider {
        LlmProvider::Gemini => {
            let key = cfg
                .api_key
                .as_deref()
                .ok_or_else(|| "missing API key".to_string())?;
            Ok(format!("{base}/v1beta/models?key={key}"))
        }
        LlmProvider::Ollama => Ok(format!("{base}/api/tags")),
    }
}
