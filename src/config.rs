//! Detection thresholds and limits.

use crate::error::{DetectError, Result};

/// Default longest candidate, in characters.
pub const DEFAULT_MAX_WORD_LEN: usize = 15;
pub const DEFAULT_MIN_TF: f64 = 1e-8;
pub const DEFAULT_MIN_ENTROPY: f64 = 1.0;
pub const DEFAULT_MIN_PMI: f64 = 3.0;

/// Settings for one detection run.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Longest substring enumerated as a candidate.
    pub max_word_len: usize,
    /// A word must have `frequency / document_length` strictly above this.
    pub min_tf: f64,
    /// A word must have `min(left_entropy, right_entropy)` strictly above this.
    pub min_entropy: f64,
    /// A word must have its worst-split PMI strictly above this.
    pub min_pmi: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            min_tf: DEFAULT_MIN_TF,
            min_entropy: DEFAULT_MIN_ENTROPY,
            min_pmi: DEFAULT_MIN_PMI,
        }
    }
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    pub fn with_min_tf(mut self, min_tf: f64) -> Self {
        self.min_tf = min_tf;
        self
    }

    pub fn with_min_entropy(mut self, min_entropy: f64) -> Self {
        self.min_entropy = min_entropy;
        self
    }

    pub fn with_min_pmi(mut self, min_pmi: f64) -> Self {
        self.min_pmi = min_pmi;
        self
    }

    /// Check every field, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.max_word_len == 0 {
            return Err(DetectError::invalid_config(
                "max_word_len",
                "must be a positive integer",
            ));
        }
        check_threshold("min_tf", self.min_tf, true)?;
        check_threshold("min_entropy", self.min_entropy, true)?;
        check_threshold("min_pmi", self.min_pmi, false)?;
        Ok(())
    }
}

fn check_threshold(field: &'static str, value: f64, non_negative: bool) -> Result<()> {
    if value.is_nan() {
        return Err(DetectError::invalid_config(field, "must not be NaN"));
    }
    if non_negative && value < 0.0 {
        return Err(DetectError::invalid_config(
            field,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(())
}
