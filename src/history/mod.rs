mod error;
mod record;
mod store;

pub use error::HistoryError;
pub use record::{DELIMITER, HistoryRecord};
pub use store::{DEFAULT_HISTORY_FILE, HistoryStore};
