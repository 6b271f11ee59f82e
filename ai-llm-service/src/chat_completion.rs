//! Provider-agnostic seam for "send a system prompt and a question, get text back".

use async_trait::async_trait;

use crate::error_handler::AiLlmError;

/// A backend able to answer a single-turn chat.
///
/// Implemented by [`crate::services::open_ai_service::OpenAiService`]; callers
/// hold it as `Arc<dyn ChatCompletion>` so tests can swap in a stub.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Returns the model's reply. An empty string means the provider answered
    /// without content.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, AiLlmError>;
}
