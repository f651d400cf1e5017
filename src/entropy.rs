//! Shannon entropy of neighbor distributions (natural log).

use std::collections::BTreeMap;

/// Entropy of a multiset of observed symbols.
///
/// An empty multiset has entropy `0`: a word that never has a neighbor on
/// one side is treated as fully certain on that side.
pub fn compute_entropy<T: Ord>(symbols: &[T]) -> f64 {
    let mut counts: BTreeMap<&T, u32> = BTreeMap::new();
    for s in symbols {
        *counts.entry(s).or_insert(0) += 1;
    }
    entropy_from_counts(counts.values().copied())
}

/// Entropy of a distribution given as per-symbol counts.
pub fn entropy_from_counts<I>(counts: I) -> f64
where
    I: IntoIterator<Item = u32>,
    I::IntoIter: Clone,
{
    let counts = counts.into_iter();
    let n: u64 = counts.clone().map(u64::from).sum();
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    counts
        .filter(|&c| c > 0)
        .map(|c| {
            let p = f64::from(c) / n;
            -p * p.ln()
        })
        .sum()
}
