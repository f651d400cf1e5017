//! Worst-split pointwise mutual information.

use crate::aggregate::{Aggregate, WordCounts};
use crate::error::{DetectError, Result};

/// `ln(p(word) / (p(prefix) * p(suffix)))` minimized over every split of
/// the word into a non-empty prefix and suffix, where `p` is the frequency
/// ratio of a substring in the document.
///
/// Single characters cannot be split and score `0`.
pub fn compute_pmi(agg: &Aggregate<'_>, record: &WordCounts) -> Result<f64> {
    let word = agg.word(record);
    if word.len() < 2 {
        return Ok(0.0);
    }
    let doc_len = agg.document().len() as f64;
    let ratio = |r: &WordCounts| r.frequency as f64 / doc_len;
    let whole = ratio(record);

    let mut pmi = f64::INFINITY;
    for i in 1..word.len() {
        let (prefix, suffix) = word.split_at(i);
        let p = lookup(agg, word, prefix)?;
        let s = lookup(agg, word, suffix)?;
        pmi = pmi.min((whole / (ratio(p) * ratio(s))).ln());
    }
    Ok(pmi)
}

fn lookup<'r>(agg: &'r Aggregate<'_>, word: &[char], part: &[char]) -> Result<&'r WordCounts> {
    agg.get(part).ok_or_else(|| DetectError::MissingSubword {
        word: word.iter().collect(),
        part: part.iter().collect(),
    })
}
