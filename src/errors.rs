//! Error types for version script generation
//!
//! Unmatched or malformed input lines are never errors; they are simply not
//! declarations of interest. [`Error`] only covers the surrounding plumbing:
//! I/O on the input and output streams, and invalid configuration.

use std::io;

/// Errors raised while configuring, scanning or emitting
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the input stream or writing the script failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The declaration pattern built from the configured prefix did not compile
    #[error("invalid declaration pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A configuration value was rejected before scanning started
    #[error("invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl Error {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
