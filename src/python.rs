//! Python bindings, built with the `python` feature.

use log::warn;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use rayon::prelude::*;

use crate::config::{
    DEFAULT_MAX_WORD_LEN, DEFAULT_MIN_ENTROPY, DEFAULT_MIN_PMI, DEFAULT_MIN_TF, DetectorConfig,
};
use crate::detector::NewWordDetector;
use crate::error::{DetectError, Result};
use crate::filter::NewWord;

impl From<DetectError> for PyErr {
    fn from(err: DetectError) -> PyErr {
        match &err {
            DetectError::InvalidConfig { .. } => PyValueError::new_err(err.to_string()),
            DetectError::Io { .. } => PyIOError::new_err(err.to_string()),
            DetectError::MissingSubword { .. } => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

#[pymethods]
impl NewWord {
    fn __repr__(&self) -> String {
        format!(
            "NewWord(word='{}', word_length={}, word_freq={}, word_pmi={:.4}, word_entropy={:.4})",
            self.word, self.word_length, self.word_freq, self.word_pmi, self.word_entropy
        )
    }
}

/// Python passes a signed length so that `0` and negatives reach validation.
fn build_detector(
    max_word_len: i64,
    min_tf: f64,
    min_entropy: f64,
    min_pmi: f64,
) -> Result<NewWordDetector> {
    if max_word_len <= 0 {
        return Err(DetectError::invalid_config(
            "max_word_len",
            format!("must be a positive integer, got {max_word_len}"),
        ));
    }
    let config = DetectorConfig::new()
        .with_max_word_len(max_word_len as usize)
        .with_min_tf(min_tf)
        .with_min_entropy(min_entropy)
        .with_min_pmi(min_pmi);
    NewWordDetector::new(config)
}

/// Detect new words in a text corpus
/// Returns: list of NewWord, shortest words first
#[pyfunction]
#[pyo3(signature = (
    corpus,
    max_word_len = DEFAULT_MAX_WORD_LEN as i64,
    min_tf = DEFAULT_MIN_TF,
    min_entropy = DEFAULT_MIN_ENTROPY,
    min_pmi = DEFAULT_MIN_PMI
))]
fn get_doc_words(
    corpus: String,
    max_word_len: i64,
    min_tf: f64,
    min_entropy: f64,
    min_pmi: f64,
) -> PyResult<Vec<NewWord>> {
    let detector = build_detector(max_word_len, min_tf, min_entropy, min_pmi)?;
    Ok(detector.detect(&corpus)?.words)
}

/// Detect new words in a file, reading it entirely in Rust
#[pyfunction]
#[pyo3(signature = (
    file_path,
    max_word_len = DEFAULT_MAX_WORD_LEN as i64,
    min_tf = DEFAULT_MIN_TF,
    min_entropy = DEFAULT_MIN_ENTROPY,
    min_pmi = DEFAULT_MIN_PMI
))]
fn get_doc_words_file(
    file_path: String,
    max_word_len: i64,
    min_tf: f64,
    min_entropy: f64,
    min_pmi: f64,
) -> PyResult<Vec<NewWord>> {
    let detector = build_detector(max_word_len, min_tf, min_entropy, min_pmi)?;
    Ok(detector.detect_file(&file_path)?.words)
}

/// Detect new words in several files, each treated as its own document
/// Returns: list of (file_path, words); unreadable files are skipped
#[pyfunction]
#[pyo3(signature = (
    file_paths,
    max_word_len = DEFAULT_MAX_WORD_LEN as i64,
    min_tf = DEFAULT_MIN_TF,
    min_entropy = DEFAULT_MIN_ENTROPY,
    min_pmi = DEFAULT_MIN_PMI
))]
fn get_doc_words_batch(
    file_paths: Vec<String>,
    max_word_len: i64,
    min_tf: f64,
    min_entropy: f64,
    min_pmi: f64,
) -> PyResult<Vec<(String, Vec<NewWord>)>> {
    let detector = build_detector(max_word_len, min_tf, min_entropy, min_pmi)?;
    let results = file_paths
        .into_par_iter()
        .filter_map(|path| match detector.detect_file(&path) {
            Ok(detection) => Some(Ok((path, detection.words))),
            Err(DetectError::Io { source, .. }) => {
                warn!("skipping {path}: {source}");
                None
            }
            Err(e) => Some(Err(e)),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(results)
}

/// Corpus-wide averages over every candidate
/// Returns: (candidates, mean_frequency, mean_entropy, mean_pmi), or None if no CJK text
#[pyfunction]
#[pyo3(signature = (corpus, max_word_len = DEFAULT_MAX_WORD_LEN as i64))]
fn corpus_summary(corpus: String, max_word_len: i64) -> PyResult<Option<(usize, f64, f64, f64)>> {
    let detector = build_detector(
        max_word_len,
        DEFAULT_MIN_TF,
        DEFAULT_MIN_ENTROPY,
        DEFAULT_MIN_PMI,
    )?;
    let summary = detector.detect(&corpus)?.summary;
    Ok(summary.map(|s| (s.candidates, s.mean_frequency, s.mean_entropy, s.mean_pmi)))
}

#[pymodule]
fn new_words_detection(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_doc_words, m)?)?;
    m.add_function(wrap_pyfunction!(get_doc_words_file, m)?)?;
    m.add_function(wrap_pyfunction!(get_doc_words_batch, m)?)?;
    m.add_function(wrap_pyfunction!(corpus_summary, m)?)?;
    m.add_class::<NewWord>()?;
    Ok(())
}
