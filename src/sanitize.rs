//! Reduce raw text to CJK unified ideographs.

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

lazy_static! {
    // U+4E00..=U+9FA5, the range the detector treats as word characters
    static ref CJK_RUN: Regex = Regex::new(r"[\u{4e00}-\u{9fa5}]+").unwrap();
}

/// A sanitized document: one shared character buffer that every candidate,
/// record and neighbor lookup indexes into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    chars: Vec<char>,
}

impl Document {
    /// Keep only CJK ideographs from `text`, in their original order.
    ///
    /// Punctuation, digits, Latin letters and whitespace are dropped, so the
    /// characters on either side of them become adjacent.
    pub fn sanitize(text: &str) -> Self {
        let chars = CJK_RUN
            .find_iter(text)
            .flat_map(|m| m.as_str().chars())
            .collect();
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn slice(&self, span: Range<usize>) -> &[char] {
        &self.chars[span]
    }

    /// Materialize a span as an owned string (output only).
    pub fn text(&self, span: Range<usize>) -> String {
        self.chars[span].iter().collect()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
