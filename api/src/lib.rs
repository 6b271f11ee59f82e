mod core;
mod error_handler;
mod routes;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::{error, info};

pub use crate::{
    core::{
        app_state::AppState,
        chain::{BLOCK_HEIGHT_LIMIT, SIMULATED_CHAIN_ID},
        config::ApiConfig,
    },
    error_handler::{AppError, AppResult},
    routes::ask::ask_route::{NO_RESPONSE_PLACEHOLDER, SYSTEM_PROMPT},
};
use crate::routes::{ask::ask_route::ask_route, verify::verify_route::verify_route};

/// Builds the HTTP router over an already constructed state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask_route))
        .route("/verify/{id}", get(verify_route))
        .with_state(Arc::new(state))
}

/// Builds the state from `config`, binds, and serves until Ctrl+C.
pub async fn start(config: ApiConfig) -> AppResult<()> {
    let state = AppState::from_config(&config).await?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.address)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %config.address, "LineraMind API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
