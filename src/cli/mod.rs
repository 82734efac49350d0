//! Command-line interface definitions.

/// CLI argument parsing with clap.
pub mod args;

pub use args::Args;
