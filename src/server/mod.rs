//! HTTP surface of the translator.

mod error;
mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::service::TranslationService;

pub use error::ApiError;
pub use handlers::{
    HistoryResponse, SentenceRequest, SentenceResponse, WordRequest, WordResponse,
};

/// Builds the router. Each route answers with and without a trailing slash.
pub fn router(service: Arc<TranslationService>) -> Router {
    Router::new()
        .route("/word/", post(handlers::word))
        .route("/word", post(handlers::word))
        .route("/sentence/", post(handlers::sentence))
        .route("/sentence", post(handlers::sentence))
        .route("/history/", get(handlers::history))
        .route("/history", get(handlers::history))
        .with_state(service)
}

/// Serves requests on `listener` until Ctrl+C is received.
pub async fn serve(listener: TcpListener, service: TranslationService) -> Result<()> {
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    tracing::info!(
        %addr,
        history = %service.store().path().display(),
        "gopher translator listening"
    );

    axum::serve(listener, router(Arc::new(service)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server stopped unexpectedly")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        // without a signal handler, keep serving instead of exiting at once
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
