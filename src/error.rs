//! Error types for new word detection.

use std::path::PathBuf;

/// Result type used throughout the crate.
pub type Result<T, E = DetectError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// Rejected before any text is processed.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// A prefix or suffix of a candidate was not counted during aggregation.
    ///
    /// Every substring no longer than `max_word_len` is enumerated, so this
    /// only happens when the aggregate was built inconsistently.
    #[error("internal consistency fault: `{part}` (part of `{word}`) missing from the aggregate")]
    MissingSubword { word: String, part: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DetectError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
