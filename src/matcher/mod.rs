//! Bounded substring edit-distance algorithms.
//!
//! Every matcher answers the same question with the same entry-point rules
//! (truncation, empty inputs, length pruning), so they can be swapped freely.

/// Banded divide-and-conquer scan, the default algorithm
pub mod banded;
/// Plain full-matrix dynamic programming
pub mod full;
mod util;

pub(crate) use util::{Prepared, prepare};

/// Edit distance value
pub type Distance = usize;

/// Trait for computing the best edit distance between a query and any substring of a text
pub trait SubstringMatcher: Send + Sync {
    /// Smallest edit distance between `query` and any contiguous substring of `text`,
    /// or `None` when it is larger than `max_distance`.
    fn distance(&self, text: &[u8], query: &[u8], max_distance: Distance) -> Option<Distance>;

    /// Whether some substring of `text` is within `max_distance` of `query`
    fn is_match(&self, text: &[u8], query: &[u8], max_distance: Distance) -> bool {
        self.distance(text, query, max_distance).is_some()
    }
}
