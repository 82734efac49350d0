//! Translation requests and their history bookkeeping.

use thiserror::Error;

use crate::history::{HistoryError, HistoryRecord, HistoryStore};
use crate::translation::{TranslateError, transform, transform_sentence};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

impl ServiceError {
    /// Returns `true` if the caller supplied bad input, as opposed to a
    /// storage failure on our side.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Translate(_) | Self::History(HistoryError::InvalidText { .. })
        )
    }
}

/// Translates input and records every successful translation.
#[derive(Debug)]
pub struct TranslationService {
    store: HistoryStore,
}

impl TranslationService {
    pub const fn new(store: HistoryStore) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn translate_word(&self, word: &str) -> Result<String, ServiceError> {
        HistoryRecord::validate_original(word)?;

        let translated = transform(word)?;
        self.store
            .append(&HistoryRecord::new(word, translated.as_str()))?;

        Ok(translated)
    }

    /// Translates a sentence. The history keeps the trimmed sentence as the
    /// original.
    pub fn translate_sentence(&self, sentence: &str) -> Result<String, ServiceError> {
        let sentence = sentence.trim();
        HistoryRecord::validate_original(sentence)?;

        let translated = transform_sentence(sentence)?;
        self.store
            .append(&HistoryRecord::new(sentence, translated.as_str()))?;

        Ok(translated)
    }

    pub fn history(&self) -> Result<Vec<HistoryRecord>, ServiceError> {
        Ok(self.store.read_all()?)
    }
}
