/// Represents the provider (backend) used for chat completions.
///
/// Only OpenAI-compatible REST APIs are supported; any gateway that exposes
/// `POST {base}/chat/completions` with the OpenAI wire format works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// OpenAI's chat completions API (or a compatible proxy).
    OpenAI,
}
