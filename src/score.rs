//! Phase two: derive entropy and PMI for every record of a finished aggregate.

use rayon::prelude::*;
use std::ops::Range;

use crate::aggregate::{Aggregate, WordCounts};
use crate::entropy::entropy_from_counts;
use crate::error::Result;
use crate::pmi::compute_pmi;
use crate::sanitize::Document;

/// Read-only statistics for one distinct candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    /// First occurrence in the document.
    pub span: Range<usize>,
    pub frequency: u64,
    /// `frequency / document_length`, in `(0, 1]`.
    pub frequency_ratio: f64,
    pub left_entropy: f64,
    pub right_entropy: f64,
    /// `min(left_entropy, right_entropy)`.
    pub combined_entropy: f64,
    /// Worst-split PMI; `0` for single characters.
    pub pmi: f64,
}

impl ScoredWord {
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn text(&self, doc: &Document) -> String {
        doc.text(self.span.clone())
    }
}

fn score_record(agg: &Aggregate<'_>, record: &WordCounts) -> Result<ScoredWord> {
    let doc_len = agg.document().len() as f64;
    let left_entropy = entropy_from_counts(record.left.values().copied());
    let right_entropy = entropy_from_counts(record.right.values().copied());
    Ok(ScoredWord {
        span: record.span.clone(),
        frequency: record.frequency,
        frequency_ratio: record.frequency as f64 / doc_len,
        left_entropy,
        right_entropy,
        combined_entropy: left_entropy.min(right_entropy),
        pmi: compute_pmi(agg, record)?,
    })
}

/// Score every record of `agg` in parallel.
///
/// The result is ordered by word length; records of equal length keep the
/// order in which they were first seen.
pub fn score_all(agg: &Aggregate<'_>) -> Result<Vec<ScoredWord>> {
    let mut scored = agg
        .records()
        .par_iter()
        .map(|record| score_record(agg, record))
        .collect::<Result<Vec<_>>>()?;
    scored.sort_by_key(ScoredWord::len);
    Ok(scored)
}
