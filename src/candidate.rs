//! Candidate enumeration as index ranges.

use std::ops::Range;

/// Every half-open range `start..end` with `end - start <= max_word_len`,
/// ordered by `start`, then by `end`.
///
/// Yields `O(len * max_word_len)` ranges without allocating.
#[derive(Debug, Clone)]
pub struct Candidates {
    len: usize,
    max_word_len: usize,
    start: usize,
    end: usize,
}

impl Candidates {
    pub fn new(len: usize, max_word_len: usize) -> Self {
        Self {
            len,
            max_word_len,
            start: 0,
            end: 1,
        }
    }

    fn row_end(&self) -> usize {
        self.start.saturating_add(self.max_word_len).min(self.len)
    }
}

impl Iterator for Candidates {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.max_word_len == 0 {
            return None;
        }
        if self.end > self.row_end() {
            self.start += 1;
            self.end = self.start + 1;
        }
        if self.start >= self.len {
            return None;
        }
        let span = self.start..self.end;
        self.end += 1;
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Candidates {}

impl Candidates {
    /// Ranges left in the current row plus every later row.
    fn remaining(&self) -> usize {
        if self.max_word_len == 0 || self.start >= self.len {
            return 0;
        }
        let row = (self.row_end() + 1).saturating_sub(self.end);
        row + candidate_count(self.len - self.start - 1, self.max_word_len)
    }
}

/// Number of ranges [`Candidates`] yields for a full document.
pub fn candidate_count(len: usize, max_word_len: usize) -> usize {
    let m = max_word_len.min(len);
    // rows with a full window contribute m each, the tail contributes m-1..1
    (len - m) * m + m * (m + 1) / 2
}
