//! Corpus-wide averages, reported for information only.

use crate::score::ScoredWord;

/// Means over every candidate of a document, single characters included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusSummary {
    pub candidates: usize,
    pub mean_frequency: f64,
    pub mean_entropy: f64,
    pub mean_pmi: f64,
}

/// `None` when there are no candidates to average.
pub fn summarize(scored: &[ScoredWord]) -> Option<CorpusSummary> {
    if scored.is_empty() {
        return None;
    }
    let n = scored.len() as f64;
    let (freq, ent, pmi) = scored.iter().fold((0.0, 0.0, 0.0), |(f, e, p), w| {
        (f + w.frequency as f64, e + w.combined_entropy, p + w.pmi)
    });
    Some(CorpusSummary {
        candidates: scored.len(),
        mean_frequency: freq / n,
        mean_entropy: ent / n,
        mean_pmi: pmi / n,
    })
}
