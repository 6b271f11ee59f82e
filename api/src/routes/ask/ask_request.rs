use serde::Deserialize;

use crate::error_handler::{AppError, AppResult};

/// Request payload for `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Free-text question.
    pub question: String,
}

impl AskRequest {
    /// Returns the question as submitted, rejecting blank input.
    pub fn into_question(self) -> AppResult<String> {
        if self.question.trim().is_empty() {
            return Err(AppError::BadRequest("question must not be empty".into()));
        }
        Ok(self.question)
    }
}
