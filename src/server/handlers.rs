use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::history::HistoryRecord;
use crate::service::{ServiceError, TranslationService};

#[derive(Debug, Deserialize)]
pub struct WordRequest {
    #[serde(rename = "english-word")]
    pub english_word: String,
}

#[derive(Debug, Serialize)]
pub struct WordResponse {
    #[serde(rename = "gopher-word")]
    pub gopher_word: String,
}

#[derive(Debug, Deserialize)]
pub struct SentenceRequest {
    #[serde(rename = "english-sentence")]
    pub english_sentence: String,
}

#[derive(Debug, Serialize)]
pub struct SentenceResponse {
    #[serde(rename = "gopher-sentence")]
    pub gopher_sentence: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryRecord>,
}

/// Runs file-touching service calls off the async worker threads.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

// Bodies are parsed from raw bytes so clients that omit the JSON
// content type are still served.
pub async fn word(
    State(service): State<Arc<TranslationService>>,
    body: Bytes,
) -> Result<Json<WordResponse>, ApiError> {
    let request: WordRequest = serde_json::from_slice(&body)?;
    tracing::debug!(word = %request.english_word, "translating word");

    let gopher_word = run_blocking(move || service.translate_word(&request.english_word)).await?;
    Ok(Json(WordResponse { gopher_word }))
}

pub async fn sentence(
    State(service): State<Arc<TranslationService>>,
    body: Bytes,
) -> Result<Json<SentenceResponse>, ApiError> {
    let request: SentenceRequest = serde_json::from_slice(&body)?;
    tracing::debug!(sentence = %request.english_sentence, "translating sentence");

    let gopher_sentence =
        run_blocking(move || service.translate_sentence(&request.english_sentence)).await?;
    Ok(Json(SentenceResponse { gopher_sentence }))
}

pub async fn history(
    State(service): State<Arc<TranslationService>>,
) -> Result<Json<HistoryResponse>, ApiError> {
    tracing::debug!("reading history");

    let history = run_blocking(move || service.history()).await?;
    Ok(Json(HistoryResponse { history }))
}
