//! Phase one: occurrence and neighbor counts per distinct candidate.

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;

use crate::candidate::{Candidates, candidate_count};
use crate::sanitize::Document;

/// Neighbor character counts for one side of a word.
pub type NeighborCounts = BTreeMap<char, u32>;

/// Raw counts accumulated for one distinct substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCounts {
    /// Span of the first occurrence; identifies the text in the document.
    pub span: Range<usize>,
    pub frequency: u64,
    pub left: NeighborCounts,
    pub right: NeighborCounts,
}

impl WordCounts {
    fn new(span: Range<usize>) -> Self {
        Self {
            span,
            frequency: 0,
            left: NeighborCounts::new(),
            right: NeighborCounts::new(),
        }
    }

    fn observe(&mut self, left: Option<char>, right: Option<char>) {
        self.frequency += 1;
        if let Some(c) = left {
            *self.left.entry(c).or_insert(0) += 1;
        }
        if let Some(c) = right {
            *self.right.entry(c).or_insert(0) += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }
}

/// Every candidate of a document, keyed by its characters.
///
/// Records are stored in creation order; keys borrow the document buffer.
#[derive(Debug)]
pub struct Aggregate<'a> {
    doc: &'a Document,
    index: HashMap<&'a [char], usize>,
    records: Vec<WordCounts>,
}

impl<'a> Aggregate<'a> {
    /// Count every candidate of `doc` up to `max_word_len` characters.
    pub fn build(doc: &'a Document, max_word_len: usize) -> Self {
        let chars = doc.chars();
        let len = chars.len();
        let mut index: HashMap<&'a [char], usize> = HashMap::new();
        let mut records = Vec::new();
        let mut seen = 0usize;

        for span in Candidates::new(len, max_word_len) {
            let key = &chars[span.clone()];
            let left = span.start.checked_sub(1).map(|i| chars[i]);
            let right = chars.get(span.end).copied();

            let slot = *index.entry(key).or_insert_with(|| {
                records.push(WordCounts::new(span.clone()));
                records.len() - 1
            });
            records[slot].observe(left, right);
            seen += 1;
        }
        debug_assert_eq!(seen, candidate_count(len, max_word_len));

        Self {
            doc,
            index,
            records,
        }
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    pub fn records(&self) -> &[WordCounts] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, word: &[char]) -> Option<&WordCounts> {
        self.index.get(word).map(|&i| &self.records[i])
    }

    /// The characters of a record.
    pub fn word(&self, record: &WordCounts) -> &'a [char] {
        self.doc.slice(record.span.clone())
    }
}
