//! Provider-agnostic facade over the configured LLM backends.
//!
//! The rest of the workspace talks to [`LlmServiceProfiles`] and never to a
//! concrete service. Two roles are exposed:
//!
//! - **chat**   — free-text generation (category extraction prompts)
//! - **vision** — image analysis (dashboard and tyre photos), optional
//!
//! Which backends get built is decided by `LLM_KIND` (see
//! [`crate::config::default_config::profiles_from_env`]). With Ollama the
//! vision role stays empty and [`LlmServiceProfiles::describe_image`]
//! reports [`ProviderErrorKind::VisionUnsupported`].

use tracing::info;

use crate::{
    config::{default_config, llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{LlmAssistError, Provider, ProviderError, ProviderErrorKind},
    health_service::{self, HealthStatus},
    services::{gemini_service::GeminiService, ollama_service::OllamaService},
};

/// One constructed chat backend.
#[derive(Debug)]
enum ChatBackend {
    Gemini(GeminiService),
    Ollama(OllamaService),
}

impl ChatBackend {
    async fn generate(&self, prompt: &str) -> Result<String, LlmAssistError> {
        match self {
            Self::Gemini(svc) => svc.generate(prompt).await,
            Self::Ollama(svc) => svc.generate(prompt).await,
        }
    }
}

/// Chat plus optional vision services, built once at startup and shared.
#[derive(Debug)]
pub struct LlmServiceProfiles {
    chat: ChatBackend,
    chat_cfg: LlmModelConfig,
    vision: Option<GeminiService>,
    vision_cfg: Option<LlmModelConfig>,
}

impl LlmServiceProfiles {
    /// Builds the profile set from environment variables.
    ///
    /// # Errors
    /// Config errors from the env layer, or constructor validation errors
    /// from the concrete services.
    pub fn from_env() -> Result<Self, LlmAssistError> {
        let (chat_cfg, vision_cfg) = default_config::profiles_from_env()?;
        Self::new(chat_cfg, vision_cfg)
    }

    /// Builds the profile set from explicit configs.
    pub fn new(
        chat_cfg: LlmModelConfig,
        vision_cfg: Option<LlmModelConfig>,
    ) -> Result<Self, LlmAssistError> {
        let chat = match chat_cfg.provider {
            LlmProvider::Gemini => ChatBackend::Gemini(GeminiService::new(chat_cfg.clone())?),
            LlmProvider::Ollama => ChatBackend::Ollama(OllamaService::new(chat_cfg.clone())?),
        };

        let vision = match &vision_cfg {
            Some(cfg) => Some(GeminiService::new(cfg.clone())?),
            None => None,
        };

        info!(
            chat_provider = ?chat_cfg.provider,
            chat_model = %chat_cfg.model,
            vision = vision.is_some(),
            "LLM service profiles ready"
        );

        Ok(Self {
            chat,
            chat_cfg,
            vision,
            vision_cfg,
        })
    }

    /// Whether a vision backend is configured.
    pub fn has_vision(&self) -> bool {
        self.vision.is_some()
    }

    /// Runs a text generation against the chat backend.
    ///
    /// # Errors
    /// Propagates provider and transport errors from the backend.
    pub async fn generate_chat(&self, prompt: &str) -> Result<String, LlmAssistError> {
        self.chat.generate(prompt).await
    }

    /// Runs an image analysis against the vision backend.
    ///
    /// # Errors
    /// [`ProviderErrorKind::VisionUnsupported`] when no vision backend is
    /// configured, otherwise provider and transport errors.
    pub async fn describe_image(
        &self,
        prompt: &str,
        mime_type: &str,
        base64_data: &str,
    ) -> Result<String, LlmAssistError> {
        let Some(vision) = &self.vision else {
            return Err(ProviderError::new(
                Provider::Ollama,
                ProviderErrorKind::VisionUnsupported,
            )
            .into());
        };
        vision.generate_with_image(prompt, mime_type, base64_data).await
    }

    /// Probes every configured backend; never fails.
    pub async fn health_all(&self) -> Vec<HealthStatus> {
        let mut cfgs = vec![&self.chat_cfg];
        // Skip the vision probe when it targets the same endpoint and key.
        if let Some(vision_cfg) = &self.vision_cfg {
            if vision_cfg != &self.chat_cfg {
                cfgs.push(vision_cfg);
            }
        }
        health_service::check_many(&cfgs).await
    }
}
