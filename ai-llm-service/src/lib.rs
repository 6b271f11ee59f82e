//! Chat-completion client used by the LineraMind API.
//!
//! - [`config`]: model config and env-driven defaults.
//! - [`services::open_ai_service::OpenAiService`]: OpenAI-compatible REST client.
//! - [`chat_completion::ChatCompletion`]: trait the API layer depends on.

pub mod chat_completion;
pub mod error_handler;

pub mod config {
    pub mod default_config;
    pub mod llm_model_config;
    pub mod llm_provider;
}

pub mod services {
    pub mod open_ai_service;
}

pub use chat_completion::ChatCompletion;
pub use error_handler::{AiLlmError, Result};
