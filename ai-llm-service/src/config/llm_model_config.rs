use crate::config::llm_provider::LlmProvider;

/// Configuration for a chat-completion model invocation.
///
/// # Fields
///
/// - `provider`: Which backend to use.
/// - `model`: The model identifier (e.g., `"gpt-5.1"`).
/// - `endpoint`: API base URL including the version segment
///   (e.g., `"https://api.openai.com/v1"`).
/// - `api_key`: API key sent as a bearer token.
/// - `max_tokens`: Output token budget, sent as `max_completion_tokens`.
/// - `temperature`: Controls randomness (left to the provider default when `None`).
/// - `top_p`: Nucleus sampling cutoff.
/// - `timeout_secs`: Optional request timeout in seconds.
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};
///
/// let cfg = LlmModelConfig {
///     provider: LlmProvider::OpenAI,
///     model: "gpt-5.1".to_string(),
///     endpoint: "https://api.openai.com/v1".to_string(),
///     api_key: Some("sk-...".to_string()),
///     max_tokens: Some(500),
///     temperature: None,
///     top_p: None,
///     timeout_secs: Some(60),
/// };
/// assert_eq!(cfg.max_tokens, Some(500));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The LLM provider/backend.
    pub provider: LlmProvider,

    /// Model identifier string.
    pub model: String,

    /// API base URL.
    pub endpoint: String,

    /// API key for authentication.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
