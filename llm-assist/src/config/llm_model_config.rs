use crate::config::llm_provider::LlmProvider;

/// Configuration for one LLM model invocation target.
///
/// General plus provider-specific parameters; extend as needed when new
/// backends are added.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The LLM provider/backend (Gemini, Ollama).
    pub provider: LlmProvider,

    /// Model identifier string (e.g. `"gemini-1.5-flash"`, `"qwen3:14b"`).
    pub model: String,

    /// Inference endpoint base URL (remote API or local server).
    pub endpoint: String,

    /// Optional API key for providers that require authentication.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 = deterministic).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
