/// Represents the provider (backend) used for LLM inference.
///
/// Gemini is the hosted default (and the only backend with vision support);
/// Ollama covers local text-only runs for development without an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Google Gemini REST API (text + vision).
    Gemini,
    /// Local Ollama runtime (text only).
    Ollama,
}
