//! Default chat-completion config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `AI_INTEGRATIONS_OPENAI_API_KEY`  = API key (mandatory)
//! - `AI_INTEGRATIONS_OPENAI_BASE_URL` = API base URL (default `https://api.openai.com/v1`)
//! - `LLM_MODEL`                       = model name (default `gpt-5.1`)
//! - `LLM_MAX_TOKENS`                  = output token budget (default 500)
//! - `LLM_TIMEOUT_SECS`                = request timeout (default 60)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, ConfigError, env_opt, env_opt_u32, env_opt_u64, must_env,
        validate_http_endpoint,
    },
};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-5.1";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Overrides read from the environment; `None` means "use the default".
#[derive(Debug, Default, Clone)]
pub struct OpenAiOverrides {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

/// Constructs the chat config from environment.
///
/// # Errors
/// - [`ConfigError::MissingVar`] if the API key is missing
/// - [`ConfigError::InvalidNumber`] if a numeric override does not parse
/// - [`ConfigError::InvalidFormat`] if the base URL has no http(s) scheme
pub fn config_openai_chat() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("AI_INTEGRATIONS_OPENAI_API_KEY")?;
    let overrides = OpenAiOverrides {
        base_url: env_opt("AI_INTEGRATIONS_OPENAI_BASE_URL"),
        model: env_opt("LLM_MODEL"),
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        timeout_secs: env_opt_u64("LLM_TIMEOUT_SECS")?,
    };
    openai_chat_config(api_key, overrides)
}

/// Builds the chat config from an API key and optional overrides.
pub fn openai_chat_config(
    api_key: String,
    overrides: OpenAiOverrides,
) -> Result<LlmModelConfig, AiLlmError> {
    let endpoint = overrides
        .base_url
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
    validate_http_endpoint("AI_INTEGRATIONS_OPENAI_BASE_URL", &endpoint)?;

    let model = overrides
        .model
        .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string());
    if model.trim().is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens: Some(overrides.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)),
        temperature: None,
        top_p: None,
        timeout_secs: Some(overrides.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
    })
}
