//! GET /verify/{id} — returns a stored entry.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use entry_store::Entry;
use tracing::{debug, error, instrument};

use crate::{
    core::{
        app_state::AppState,
        chain::{SIMULATED_CHAIN_ID, VerifyId},
    },
    error_handler::{AppError, AppResult},
};

/// Handler: GET /verify/{id}
///
/// `id` is either a bare integer or the display form `linera:<chain_id>:<id>`.
#[instrument(name = "verify_route", skip_all, fields(id = %raw_id))]
pub async fn verify_route(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Entry>> {
    let verify_id = raw_id
        .parse::<VerifyId>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let Some(id) = verify_id.entry_id_on(SIMULATED_CHAIN_ID) else {
        debug!("reference points at another chain");
        return Err(AppError::NotFound);
    };

    let entry = state.store.get_entry(id).await.map_err(|e| {
        error!(error = %e, id, "entry lookup failed");
        AppError::VerifyFailed
    })?;

    entry.map(Json).ok_or(AppError::NotFound)
}
