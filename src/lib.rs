//! Statistical discovery of new words in unsegmented Chinese text.
//!
//! No dictionary or trained model is involved. A document is reduced to CJK
//! ideographs, every substring up to `max_word_len` characters becomes a
//! candidate, and candidates are kept when they are frequent enough, have
//! varied neighbors on both sides (entropy) and are more cohesive than any
//! of their two-part splits (PMI).
//!
//! ```
//! use new_words_detection::{DetectorConfig, get_doc_words};
//!
//! let corpus = "甲特朗普乙，丙特朗普丁。戊特朗普己；庚特朗普辛！";
//! let config = DetectorConfig::new().with_max_word_len(4).with_min_pmi(1.0);
//! let words = get_doc_words(corpus, &config).unwrap();
//! assert_eq!(words[0].word, "特朗普");
//! ```

pub mod aggregate;
pub mod candidate;
pub mod config;
pub mod detector;
pub mod entropy;
pub mod error;
pub mod filter;
pub mod pmi;
pub mod sanitize;
pub mod score;
pub mod summary;

#[cfg(feature = "python")]
mod python;

pub use config::DetectorConfig;
pub use detector::{Detection, NewWordDetector, get_doc_words};
pub use error::{DetectError, Result};
pub use filter::NewWord;
pub use summary::CorpusSummary;
