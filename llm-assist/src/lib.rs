//! LLM assistance for the diagnostic chatbot.
//!
//! Thin clients for the supported providers (Gemini REST, local Ollama),
//! unified error types, best-effort health checks, and a profile facade
//! ([`service_profiles::LlmServiceProfiles`]) with two logical roles:
//! **chat** (free-text category extraction) and **vision** (dashboard and
//! tyre photo analysis). The domain prompts and their strict-JSON response
//! parsing live in [`extraction`].
//!
//! The diagnosis itself never depends on an LLM: these calls only feed
//! symptom flags and category hints into the scripted flow, and every
//! caller degrades gracefully when the provider is unreachable.

pub mod config;
pub mod error_handler;
pub mod extraction;
pub mod health_service;
pub mod service_profiles;
pub mod services;
pub mod telemetry;

pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::{LlmAssistError, Result};
pub use service_profiles::LlmServiceProfiles;
