use thiserror::Error;

/// Errors raised while transliterating input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A word with no characters cannot be transliterated.
    #[error("word must not be empty")]
    EmptyWord,

    /// A sentence needs at least an end sign after trimming.
    #[error("sentence must not be empty")]
    EmptySentence,
}
