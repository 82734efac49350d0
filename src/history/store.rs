use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{HistoryError, HistoryRecord};

/// File name used when no history path is configured.
pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// Append-only history log backed by a flat text file.
///
/// Each record occupies one line. Records are separated by `\n` with no
/// trailing newline after the last one. The file is created on the first
/// append and never rewritten.
///
/// The internal lock only serializes access from this process; other
/// processes writing the same file are not coordinated.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self) -> impl FnOnce(io::Error) -> HistoryError + '_ {
        move |source| HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    // The guarded data is `()`, so a poisoned lock carries no broken state.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a record to the log, creating the file if needed.
    pub fn append(&self, record: &HistoryRecord) -> Result<(), HistoryError> {
        record.validate()?;

        let _guard = self.guard();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(self.io_error())?;

        let is_empty = file.metadata().map_err(self.io_error())?.len() == 0;
        let line = if is_empty {
            record.to_line()
        } else {
            format!("\n{}", record.to_line())
        };

        file.write_all(line.as_bytes()).map_err(self.io_error())?;
        tracing::debug!(path = %self.path.display(), "appended history record");
        Ok(())
    }

    /// Reads every record, sorted case-insensitively by the full stored line.
    ///
    /// The sort key is the raw line including the delimiter and translated
    /// text, not the parsed original. A missing file reads as an empty
    /// history.
    ///
    /// Every non-empty line must contain the delimiter or the read fails
    /// with [`HistoryError::MalformedRecord`]. Empty lines are the one
    /// exception: they are skipped.
    pub fn read_all(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let contents = {
            let _guard = self.guard();
            match fs::read_to_string(&self.path) {
                Ok(contents) => contents,
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
                Err(e) => return Err(self.io_error()(e)),
            }
        };

        let mut lines: Vec<(usize, &str)> = contents
            .split('\n')
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| (i + 1, line))
            .collect();
        lines.sort_by_cached_key(|(_, line)| line.to_lowercase());

        lines
            .into_iter()
            .map(|(line_no, line)| {
                HistoryRecord::parse(line).ok_or_else(|| HistoryError::MalformedRecord {
                    line: line_no,
                    content: line.to_string(),
                })
            })
            .collect()
    }
}
