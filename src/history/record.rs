use serde::ser::{Serialize, SerializeMap, Serializer};

use super::HistoryError;

/// Separates the original and translated text on a stored line.
pub const DELIMITER: &str = "######";

/// One past translation: what was asked and what was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub original: String,
    pub translated: String,
}

impl HistoryRecord {
    pub fn new(original: impl Into<String>, translated: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translated: translated.into(),
        }
    }

    /// Checks that `text` can be stored in either half of a record.
    pub fn validate_text(field: &'static str, text: &str) -> Result<(), HistoryError> {
        if text.contains(DELIMITER) {
            return Err(HistoryError::InvalidText {
                field,
                reason: "must not contain the history delimiter",
            });
        }
        if text.contains(['\n', '\r']) {
            return Err(HistoryError::InvalidText {
                field,
                reason: "must not contain line breaks",
            });
        }
        Ok(())
    }

    /// Checks text destined for the original half of a record.
    ///
    /// A trailing `#` would merge with the delimiter and move the split
    /// point left. The translated half has no such restriction because
    /// parsing splits on the first delimiter.
    pub fn validate_original(text: &str) -> Result<(), HistoryError> {
        Self::validate_text("original", text)?;
        if text.ends_with('#') {
            return Err(HistoryError::InvalidText {
                field: "original",
                reason: "must not touch the history delimiter",
            });
        }
        Ok(())
    }

    /// Checks that the record reads back as exactly this pair once stored.
    pub fn validate(&self) -> Result<(), HistoryError> {
        Self::validate_original(&self.original)?;
        Self::validate_text("translated", &self.translated)?;
        if Self::parse(&self.to_line()).as_ref() != Some(self) {
            return Err(HistoryError::InvalidText {
                field: "translated",
                reason: "must not touch the history delimiter",
            });
        }
        Ok(())
    }

    /// Serializes the record as a single log line (without newline).
    pub fn to_line(&self) -> String {
        format!("{}{DELIMITER}{}", self.original, self.translated)
    }

    /// Parses a stored line, splitting on the first delimiter.
    ///
    /// Returns `None` if the line has no delimiter.
    pub fn parse(line: &str) -> Option<Self> {
        line.split_once(DELIMITER)
            .map(|(original, translated)| Self::new(original, translated))
    }
}

/// Serializes as a single-key map `{original: translated}`, the shape the
/// history endpoint has always returned.
impl Serialize for HistoryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.original, &self.translated)?;
        map.end()
    }
}
