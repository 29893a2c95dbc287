//! Sublev finds fuzzy occurrences of a short query inside a longer text.
//!
//! The question it answers is: does some contiguous substring of `text` lie within
//! `max_distance` single-byte insertions, deletions and substitutions of `query`, and
//! if so, what is the smallest such distance? This is the classic "k-differences"
//! approximate substring search.
//!
//! The default matcher never materializes the full `|query| × |text|` edit-distance
//! matrix. It scans one row at a time and only descends into the windows of the text
//! that can still produce a result within the threshold.
//!
//! # Examples
//!
//! ```
//! use sublev::{NOT_FOUND, levenshtein_substring_match, substring_distance};
//!
//! assert_eq!(substring_distance(b"kitten", b"xxkitxenyy", 1), Some(1));
//! assert_eq!(substring_distance(b"ABC", b"xxabcxx", 0), Some(0));
//! assert_eq!(levenshtein_substring_match(b"zzzzz", 5, b"abc", 3, 1), NOT_FOUND);
//! ```
//!
//! # Truncation
//!
//! Both inputs are truncated to their first [`MAX_LENGTH`] bytes before matching.
//! This is part of the contract: a longer input behaves exactly like its truncated
//! prefix.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::engine::{Algorithm, Engine, EngineBuilder, MatchResult};
pub use crate::error::{Error, Result};
pub use crate::matcher::SubstringMatcher;
pub use crate::matcher::banded::BandedMatcher;
pub use crate::matcher::full::FullMatrixMatcher;
pub use crate::options::SublevOptions;

pub mod engine;
mod error;
pub mod matcher;
pub mod options;
pub mod output;
pub mod prelude;
pub mod reader;

#[cfg(feature = "cli")]
pub mod completions;
#[cfg(feature = "cli")]
pub mod manpage;

/// Maximum number of bytes of either input taken into account.
///
/// Longer queries and texts are silently truncated to this many bytes.
pub const MAX_LENGTH: usize = 1024;

/// Sentinel returned by [`levenshtein_substring_match`] when no substring is within
/// the threshold. Real distances never exceed [`MAX_LENGTH`].
pub const NOT_FOUND: usize = usize::MAX;

//------------------------------------------------------------------------------
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
/// Case sensitivity mode for matching
pub enum CaseMatching {
    /// Case-sensitive matching
    Respect,
    /// ASCII case-insensitive matching
    #[default]
    Ignore,
    /// Smart case: case-insensitive unless the query contains an ASCII uppercase byte
    Smart,
}

impl CaseMatching {
    /// Resolves whether bytes must be compared verbatim for `query`.
    #[must_use]
    pub fn respect_case(self, query: &[u8]) -> bool {
        match self {
            CaseMatching::Respect => true,
            CaseMatching::Ignore => false,
            CaseMatching::Smart => query.iter().any(u8::is_ascii_uppercase),
        }
    }
}

//------------------------------------------------------------------------------
/// Smallest edit distance between `query[..query_len]` and any substring of
/// `text[..text_len]`, or [`NOT_FOUND`] if it exceeds `max_distance`.
///
/// Comparison folds ASCII case. Both lengths are clamped to [`MAX_LENGTH`] and to the
/// length of their slice.
///
/// An empty query yields `text_len` when `text_len <= max_distance`.
///
/// ```
/// use sublev::{NOT_FOUND, levenshtein_substring_match};
///
/// assert_eq!(levenshtein_substring_match(b"", 0, b"hi", 2, 3), 2);
/// assert_eq!(levenshtein_substring_match(b"", 0, b"hello", 5, 3), NOT_FOUND);
/// assert_eq!(levenshtein_substring_match(b"a", 1, b"", 0, 5), NOT_FOUND);
/// ```
#[must_use]
pub fn levenshtein_substring_match(
    query: &[u8],
    query_len: usize,
    text: &[u8],
    text_len: usize,
    max_distance: usize,
) -> usize {
    let query = &query[..query_len.min(query.len())];
    let text = &text[..text_len.min(text.len())];
    substring_distance(query, text, max_distance).unwrap_or(NOT_FOUND)
}

/// Smallest edit distance between `query` and any substring of `text`, if it is
/// within `max_distance`.
///
/// This is [`levenshtein_substring_match`] with the lengths taken from the slices.
#[must_use]
pub fn substring_distance(query: &[u8], text: &[u8], max_distance: usize) -> Option<usize> {
    BandedMatcher::default().distance(text, query, max_distance)
}
