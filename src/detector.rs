//! End-to-end detection over one document.

use log::{debug, info};
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::aggregate::Aggregate;
use crate::config::DetectorConfig;
use crate::error::{DetectError, Result};
use crate::filter::{NewWord, select};
use crate::sanitize::Document;
use crate::score::score_all;
use crate::summary::{CorpusSummary, summarize};

/// Output of one detection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Selected words, shortest first.
    pub words: Vec<NewWord>,
    /// Length of the sanitized document.
    pub document_length: usize,
    /// Informational averages over all candidates; `None` for an empty document.
    pub summary: Option<CorpusSummary>,
}

#[derive(Debug, Clone, Default)]
pub struct NewWordDetector {
    config: DetectorConfig,
}

impl NewWordDetector {
    /// Fails if `config` is invalid, before any text is seen.
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn detect(&self, corpus: &str) -> Result<Detection> {
        let started = Instant::now();
        let doc = Document::sanitize(corpus);
        let agg = Aggregate::build(&doc, self.config.max_word_len);
        debug!(
            "sanitized {} chars into {} distinct candidates",
            doc.len(),
            agg.len()
        );

        let scored = score_all(&agg)?;
        let summary = summarize(&scored);
        match &summary {
            Some(s) => debug!(
                "corpus averages: freq={:.4} entropy={:.4} pmi={:.4}",
                s.mean_frequency, s.mean_entropy, s.mean_pmi
            ),
            None => debug!("no candidates to average"),
        }

        let words = select(&doc, &scored, &self.config);
        info!(
            "selected {} new words in {:?}",
            words.len(),
            started.elapsed()
        );
        Ok(Detection {
            words,
            document_length: doc.len(),
            summary,
        })
    }

    /// Read a UTF-8 file and run [`detect`](Self::detect) on its contents.
    pub fn detect_file(&self, path: impl AsRef<Path>) -> Result<Detection> {
        let path = path.as_ref();
        let corpus = fs::read_to_string(path).map_err(|source| DetectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.detect(&corpus)
    }
}

/// Detect new words in `corpus` with the given thresholds.
pub fn get_doc_words(corpus: &str, config: &DetectorConfig) -> Result<Vec<NewWord>> {
    let detector = NewWordDetector::new(config.clone())?;
    Ok(detector.detect(corpus)?.words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::passes;
    use crate::score::ScoredWord;

    const EPS: f64 = 1e-12;

    fn relaxed(max_word_len: usize) -> DetectorConfig {
        DetectorConfig::new()
            .with_max_word_len(max_word_len)
            .with_min_tf(0.0)
            .with_min_entropy(0.0)
            .with_min_pmi(0.0)
    }

    fn scored_doc(corpus: &str, max_word_len: usize) -> (Document, Vec<ScoredWord>) {
        let doc = Document::sanitize(corpus);
        let agg = Aggregate::build(&doc, max_word_len);
        let scored = score_all(&agg).unwrap();
        (doc, scored)
    }

    #[test]
    fn test_golden_trump_fixture() {
        let (doc, scored) = scored_doc("美国总统特朗普", 4);
        assert_eq!(doc.len(), 7);
        // 7 + 6 + 5 + 4 ranges, every substring distinct
        assert_eq!(scored.len(), 22);

        let ln7 = 7f64.ln();
        for word in ["美国", "总统", "特朗普", "朗普"] {
            let w = scored.iter().find(|w| w.text(&doc) == word).unwrap();
            assert_eq!(w.frequency, 1, "{word}");
            assert!((w.frequency_ratio - 1.0 / 7.0).abs() < EPS);
            // each part also occurs once, so every split scores ln(L)
            assert!((w.pmi - ln7).abs() < EPS, "{word}: {}", w.pmi);
            // at most one neighbor per side
            assert_eq!(w.left_entropy, 0.0);
            assert_eq!(w.right_entropy, 0.0);
        }

        // strict entropy threshold: zero-entropy words cannot pass min_entropy=0
        let detection = NewWordDetector::new(relaxed(4))
            .unwrap()
            .detect("美国总统特朗普")
            .unwrap();
        assert!(detection.words.is_empty());
        let summary = detection.summary.unwrap();
        assert_eq!(summary.candidates, 22);
        assert!((summary.mean_pmi - 15.0 * ln7 / 22.0).abs() < EPS);
    }

    #[test]
    fn test_detects_recurring_word() {
        let corpus = "甲特朗普乙，丙特朗普丁。戊特朗普己；庚特朗普辛！";
        let config = DetectorConfig::new()
            .with_max_word_len(4)
            .with_min_entropy(1.0)
            .with_min_pmi(1.0);
        let words = get_doc_words(corpus, &config).unwrap();

        assert_eq!(words.len(), 1);
        let w = &words[0];
        assert_eq!(w.word, "特朗普");
        assert_eq!(w.word_length, 3);
        assert_eq!(w.word_freq, 4);
        assert!((w.word_entropy - 4f64.ln()).abs() < EPS);
        // 特朗普, 特, 朗普 all occur 4 times in 20 chars
        assert!((w.word_pmi - 5f64.ln()).abs() < EPS);
    }

    #[test]
    fn test_output_matches_predicates() {
        let corpus = "上海自来水来自海上，海上自来水很好。自来水公司说上海的自来水来自江河，\
                      江河的水很清，自来水公司每天检测自来水。";
        let config = DetectorConfig::new()
            .with_max_word_len(5)
            .with_min_entropy(0.5)
            .with_min_pmi(0.5);
        let words = get_doc_words(corpus, &config).unwrap();
        let (doc, scored) = scored_doc(corpus, 5);

        let expected: Vec<String> = scored
            .iter()
            .filter(|w| passes(w, &config))
            .map(|w| w.text(&doc))
            .collect();
        let actual: Vec<String> = words.iter().map(|w| w.word.clone()).collect();
        assert_eq!(actual, expected);
        assert!(actual.contains(&"自来水".to_string()));
        assert!(words.windows(2).all(|p| p[0].word_length <= p[1].word_length));
    }

    #[test]
    fn test_deterministic() {
        let corpus = "自来水公司说上海的自来水来自江河，江河的水很清，自来水公司每天检测自来水。";
        let config = relaxed(6).with_min_entropy(0.1);
        let first = get_doc_words(corpus, &config).unwrap();
        for _ in 0..5 {
            assert_eq!(get_doc_words(corpus, &config).unwrap(), first);
        }
    }

    #[test]
    fn test_single_char_window_is_empty() {
        let corpus = "甲特朗普乙丙特朗普丁戊特朗普己庚特朗普辛";
        let config = relaxed(1);
        assert!(get_doc_words(corpus, &config).unwrap().is_empty());
    }

    #[test]
    fn test_unbounded_window_scores_every_split() {
        let config = relaxed(usize::MAX);
        assert!(config.validate().is_ok());
        let detection = NewWordDetector::new(config).unwrap().detect("美国总统").unwrap();
        // 4 + 3 + 2 + 1 distinct substrings
        assert_eq!(detection.summary.unwrap().candidates, 10);
    }

    #[test]
    fn test_no_cjk_input() {
        let detection = NewWordDetector::default()
            .detect("Only latin text, 123!")
            .unwrap();
        assert!(detection.words.is_empty());
        assert_eq!(detection.document_length, 0);
        assert_eq!(detection.summary, None);
    }

    #[test]
    fn test_invalid_config_fails_first() {
        let err = NewWordDetector::new(DetectorConfig::new().with_max_word_len(0)).unwrap_err();
        assert!(matches!(err, DetectError::InvalidConfig { .. }));
        assert!(get_doc_words("美国", &DetectorConfig::new().with_max_word_len(0)).is_err());
    }

    #[test]
    fn test_detect_file() {
        let path = std::env::temp_dir().join(format!("nwd-{}.txt", std::process::id()));
        fs::write(&path, "甲特朗普乙，丙特朗普丁。戊特朗普己；庚特朗普辛！").unwrap();
        let detector = NewWordDetector::new(
            DetectorConfig::new().with_max_word_len(4).with_min_pmi(1.0),
        )
        .unwrap();
        let detection = detector.detect_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(detection.document_length, 20);
        assert_eq!(detection.words[0].word, "特朗普");

        let err = detector.detect_file(path.with_extension("missing")).unwrap_err();
        assert!(matches!(err, DetectError::Io { .. }));
    }
}
