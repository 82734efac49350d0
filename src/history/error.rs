use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the history log.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The text cannot be stored without corrupting the log format.
    #[error("{field} text {reason}")]
    InvalidText {
        /// Which half of the record was rejected (`original` or `translated`).
        field: &'static str,
        /// Why the text was rejected.
        reason: &'static str,
    },

    /// A stored line has no delimiter.
    #[error("malformed history record at line {line}: {content:?}")]
    MalformedRecord {
        /// 1-based line number in the history file.
        line: usize,
        /// The offending line as stored.
        content: String,
    },

    /// Reading or writing the history file failed.
    #[error("history file {}: {source}", path.display())]
    Io {
        /// Path of the history file.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
