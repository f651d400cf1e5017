//! Threshold selection of new words.

use crate::config::DetectorConfig;
use crate::sanitize::Document;
use crate::score::ScoredWord;

/// One detected word, as returned to callers.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all, frozen))]
#[derive(Debug, Clone, PartialEq)]
pub struct NewWord {
    pub word: String,
    pub word_length: usize,
    pub word_freq: u64,
    pub word_pmi: f64,
    pub word_entropy: f64,
}

/// Whether a scored candidate clears every threshold of `config`.
///
/// All comparisons are strict, and single characters never qualify.
pub fn passes(word: &ScoredWord, config: &DetectorConfig) -> bool {
    word.combined_entropy > config.min_entropy
        && word.pmi > config.min_pmi
        && word.frequency_ratio > config.min_tf
        && word.len() > 1
}

/// Keep the candidates that pass, preserving their order.
pub fn select(doc: &Document, scored: &[ScoredWord], config: &DetectorConfig) -> Vec<NewWord> {
    scored
        .iter()
        .filter(|w| passes(w, config))
        .map(|w| NewWord {
            word: w.text(doc),
            word_length: w.len(),
            word_freq: w.frequency,
            word_pmi: w.pmi,
            word_entropy: w.combined_entropy,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(len: usize, ratio: f64, entropy: f64, pmi: f64) -> ScoredWord {
        ScoredWord {
            span: 0..len,
            frequency: 1,
            frequency_ratio: ratio,
            left_entropy: entropy,
            right_entropy: entropy,
            combined_entropy: entropy,
            pmi,
        }
    }

    #[test]
    fn test_each_predicate() {
        let config = DetectorConfig::default();
        assert!(passes(&scored(2, 0.1, 1.5, 3.5), &config));
        assert!(!passes(&scored(1, 0.1, 1.5, 3.5), &config));
        assert!(!passes(&scored(2, 0.1, 1.0, 3.5), &config));
        assert!(!passes(&scored(2, 0.1, 1.5, 3.0), &config));
        assert!(!passes(&scored(2, 1e-9, 1.5, 3.5), &config));
    }

    #[test]
    fn test_select_keeps_order() {
        let doc = Document::sanitize("美国总统");
        let words = vec![
            scored(2, 0.25, 2.0, 4.0),
            scored(3, 0.25, 0.5, 4.0),
            scored(4, 0.25, 2.0, 5.0),
        ];
        let selected = select(&doc, &words, &DetectorConfig::default());
        let texts: Vec<&str> = selected.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(texts, vec!["美国", "美国总统"]);
        assert_eq!(selected[1].word_length, 4);
        assert_eq!(selected[1].word_pmi, 5.0);
        assert_eq!(selected[1].word_entropy, 2.0);
    }
}
