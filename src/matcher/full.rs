//! Full-matrix substring edit distance.
//!
//! Fills every cell of the semi-global edit-distance matrix with two rolling rows and
//! takes the minimum of the last row. It applies the same entry-point rules as the
//! banded matcher but never prunes, which makes it a simple reference for it.

use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::CaseMatching;
use crate::matcher::util::fold;
use crate::matcher::{Distance, Prepared, SubstringMatcher, prepare};

/// Unpruned dynamic-programming matcher
#[derive(Debug, Default)]
pub struct FullMatrixMatcher {
    case: CaseMatching,
    no_cache: bool,
    #[allow(clippy::type_complexity)]
    rows: ThreadLocal<RefCell<(Vec<Distance>, Vec<Distance>)>>,
}

impl FullMatrixMatcher {
    /// Creates a matcher with the given case policy.
    pub fn new(case: CaseMatching) -> Self {
        Self {
            case,
            ..Default::default()
        }
    }

    /// Enables or disables reuse of the per-thread row buffers between calls.
    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.no_cache = !use_cache;
        self
    }
}

impl SubstringMatcher for FullMatrixMatcher {
    fn distance(&self, text: &[u8], query: &[u8], max_distance: Distance) -> Option<Distance> {
        let (query, text, respect_case) = match prepare(query, text, max_distance, self.case) {
            Prepared::Done(result) => return result,
            Prepared::Scan {
                query,
                text,
                respect_case,
            } => (query, text, respect_case),
        };

        let mut rows = self.rows.get_or(|| RefCell::new((Vec::new(), Vec::new()))).borrow_mut();
        let (row, row_prev) = &mut *rows;
        row.clear();
        row.resize(text.len() + 1, 0);
        row_prev.clear();
        row_prev.resize(text.len() + 1, 0);

        for (a_index, &q) in query.iter().enumerate() {
            let ch = fold(q, respect_case);
            row[0] = a_index + 1;
            for i in 1..=text.len() {
                row[i] = if fold(text[i - 1], respect_case) == ch {
                    row_prev[i - 1]
                } else {
                    1 + row_prev[i].min(row[i - 1]).min(row_prev[i - 1])
                };
            }
            std::mem::swap(row, row_prev);
        }

        let best = row_prev[1..].iter().copied().min().unwrap_or(Distance::MAX);

        if self.no_cache {
            *rows = (Vec::new(), Vec::new());
        }
        (best <= max_distance).then_some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(text: &str, query: &str, max_distance: usize) -> Option<usize> {
        FullMatrixMatcher::default().distance(text.as_bytes(), query.as_bytes(), max_distance)
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(distance("sitting", "kitten", 3), Some(2));
        assert_eq!(distance("xxkitxenyy", "kitten", 1), Some(1));
        assert_eq!(distance("flaw", "lawn", 2), Some(1));
    }

    #[test]
    fn free_start_and_end() {
        assert_eq!(distance("a very long haystack with a needle inside", "needle", 0), Some(0));
        assert_eq!(distance("needle", "NEEDLE", 0), Some(0));
    }

    #[test]
    fn respects_case_when_asked() {
        let matcher = FullMatrixMatcher::new(CaseMatching::Respect);
        assert_eq!(matcher.distance(b"needle", b"NEEDLE", 0), None);
        assert_eq!(matcher.distance(b"needle", b"NEEDLE", 6), Some(6));
    }

    #[test]
    fn without_cache() {
        let matcher = FullMatrixMatcher::default().use_cache(false);
        assert_eq!(matcher.distance(b"xxkitxenyy", b"kitten", 1), Some(1));
        assert_eq!(matcher.distance(b"nedle", b"needle", 1), Some(1));
        assert_eq!(matcher.distance(b"xxkitxenyy", b"kitten", 1), Some(1));
    }

    #[test]
    fn threshold_filters_the_result() {
        assert_eq!(distance("abc", "zzzzz", 4), None);
        assert_eq!(distance("abc", "zzzzz", 5), Some(5));
    }
}
