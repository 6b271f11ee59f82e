//! POST /ask — answers a question and records it on the simulated chain.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use entry_store::{Entry, NewEntry};
use tracing::{error, info, instrument};

use crate::{
    core::{
        app_state::AppState,
        chain::{SIMULATED_CHAIN_ID, draw_block_height},
    },
    error_handler::{AppError, AppResult},
    routes::ask::ask_request::AskRequest,
};

/// System message sent ahead of every user question.
pub const SYSTEM_PROMPT: &str = "You are LineraMind, an advanced AI running on the Linera protocol. Be concise, accurate, and technical.";

/// Stored instead of an empty completion.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response generated.";

/// Handler: POST /ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"What is a microchain?"}'
/// ```
#[instrument(name = "ask_route", skip_all)]
pub async fn ask_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<Entry>> {
    let Json(body) = payload?;
    let question = body.into_question()?;

    let answer = state
        .llm
        .complete(SYSTEM_PROMPT, &question)
        .await
        .map_err(|e| {
            error!(error = %e, "chat completion failed");
            AppError::AskFailed
        })?;

    let answer = if answer.is_empty() {
        NO_RESPONSE_PLACEHOLDER.to_string()
    } else {
        answer
    };

    let entry = state
        .store
        .create_entry(NewEntry {
            question,
            answer,
            chain_id: SIMULATED_CHAIN_ID.to_string(),
            block_height: draw_block_height(),
        })
        .await
        .map_err(|e| {
            error!(error = %e, "failed to store entry");
            AppError::AskFailed
        })?;

    info!(
        id = entry.id,
        block_height = entry.block_height,
        "answer recorded"
    );

    Ok(Json(entry))
}
