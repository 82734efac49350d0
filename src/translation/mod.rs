mod error;
mod sentence;
mod word;

pub use error::TranslateError;
pub use sentence::transform_sentence;
pub use word::{VOWELS, transform};
