//! # gopher-translator - English to gopher language over HTTP
//!
//! Translates English words and sentences into gopher language and keeps an
//! append-only history of every translation.
//!
//! ## Translation rules
//!
//! - `apple` -> `gapple` (starts with a vowel; `y` counts as one)
//! - `xray` -> `gexray` (starts with `xr`)
//! - `square` -> `aresquogo` (`qu` right before the first vowel)
//! - `chair` -> `airchogo` (leading consonants move to the end, plus `ogo`)
//!
//! ## Quick Start
//!
//! ```bash
//! gopher-translator --port 8080
//!
//! curl -d '{"english-word": "apple"}' localhost:8080/word/
//! curl -d '{"english-sentence": "I see."}' localhost:8080/sentence/
//! curl localhost:8080/history/
//! ```
//!
//! History is stored in `history.txt` as `original######translated` lines.

/// Command-line interface definitions.
pub mod cli;

/// Append-only translation history log.
pub mod history;

/// Tracing subscriber setup.
pub mod logging;

/// HTTP routes and error responses.
pub mod server;

/// Translation plus history bookkeeping.
pub mod service;

/// Word and sentence transliteration.
pub mod translation;
