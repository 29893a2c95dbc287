//! Banded divide-and-conquer scan for the best substring edit distance.
//!
//! The edit-distance matrix has one row per query byte and one column per text byte,
//! plus column 0 for the empty prefix. The top row is all zeros so that a match may
//! start anywhere in the text for free, while the query has to be consumed in full.
//!
//! Rows are filled left to right. While a row is filled, the span of columns whose
//! value is within the threshold (the *band*) is tracked. A band is closed once the
//! scan gets further past its last in-threshold column than there are query bytes
//! left: no remaining query byte can reach back into it. A closed band is solved at
//! once, recursively, as a narrower sub-window with one query byte fewer. The last
//! query byte does not recurse; its row minimum is the candidate answer.
//!
//! Only two rows of storage are used for the whole recursion. A sub-window reads the
//! parent's current row as its previous row and writes its own current row over the
//! parent's previous row, both shifted to the band's first column. The parent never
//! reads those columns again.
//!
//! # Example:
//! ```
//! use sublev::matcher::SubstringMatcher;
//! use sublev::matcher::banded::BandedMatcher;
//!
//! let matcher = BandedMatcher::default();
//!
//! assert_eq!(matcher.distance(b"xxkitxenyy", b"kitten", 1), Some(1));
//! assert_eq!(matcher.distance(b"abc", b"zzzzz", 1), None);
//! ```

use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::CaseMatching;
use crate::matcher::util::fold;
use crate::matcher::{Distance, Prepared, SubstringMatcher, prepare};

const NO_RESULT: Distance = Distance::MAX;

/// One recursive sub-problem: a query suffix against a window of the text.
struct Range<'a> {
    /// current query byte, already case-folded
    ch: u8,
    /// unconsumed query suffix, `query[0]` is the current byte
    query: &'a [u8],
    /// 1-based index of `ch` in the full query
    query_index: usize,
    /// window of the text, column `i` refers to `text[i - 1]`
    text: &'a [u8],
    row: &'a mut [Distance],
    row_prev: &'a mut [Distance],
    max_distance: Distance,
    respect_case: bool,
    /// first and last column of the band, `text.len() + 1` when there is none
    first_match: usize,
    last_match: usize,
}

impl<'a> Range<'a> {
    fn initial(
        query: &'a [u8],
        text: &'a [u8],
        max_distance: Distance,
        respect_case: bool,
        row: &'a mut [Distance],
        row_prev: &'a mut [Distance],
    ) -> Self {
        // the top row is free: a match may start at any column
        row_prev[..=text.len()].fill(0);

        let mut range = Range {
            ch: fold(query[0], respect_case),
            query,
            query_index: 1,
            text,
            row,
            row_prev,
            max_distance,
            respect_case,
            first_match: 0,
            last_match: 0,
        };
        range.clear_band();
        range
    }

    fn has_band(&self) -> bool {
        self.first_match <= self.text.len()
    }

    fn clear_band(&mut self) {
        self.first_match = self.text.len() + 1;
        self.last_match = self.text.len() + 1;
    }

    fn is_last_row(&self) -> bool {
        self.query.len() == 1
    }

    /// Edit distance of the consumed query prefix against the best substring ending at column `i`.
    #[inline]
    fn cell(&self, i: usize) -> Distance {
        if fold(self.text[i - 1], self.respect_case) == self.ch {
            self.row_prev[i - 1]
        } else {
            let insertion = self.row_prev[i];
            let deletion = self.row[i - 1];
            let substitution = self.row_prev[i - 1];
            1 + insertion.min(deletion).min(substitution)
        }
    }

    fn track_band(&mut self, i: usize) {
        if self.row[i] <= self.max_distance {
            if !self.has_band() {
                self.first_match = i;
            }
            self.last_match = i;
        }
    }

    /// Each remaining query byte can push an alignment at most one column further.
    fn is_beyond_band(&self, i: usize) -> bool {
        i > self.last_match + self.query.len()
    }

    /// Solves the band with the next query byte, reusing this range's rows.
    fn solve_band(&mut self) -> Distance {
        let first = self.first_match;
        let len = (self.last_match - first + self.query.len()).min(self.text.len() - first + 1);
        trace!(
            "band {}..={} at query index {}, sub-window of {} columns",
            first, self.last_match, self.query_index, len
        );

        let (query, text) = (self.query, self.text);
        let query = &query[1..];
        let mut sub = Range {
            ch: fold(query[0], self.respect_case),
            query,
            query_index: self.query_index + 1,
            text: &text[first - 1..first - 1 + len],
            row: &mut self.row_prev[first - 1..],
            row_prev: &mut self.row[first - 1..],
            max_distance: self.max_distance,
            respect_case: self.respect_case,
            first_match: 0,
            last_match: 0,
        };
        sub.clear_band();
        sub.process()
    }

    fn process(&mut self) -> Distance {
        let mut best = NO_RESULT;

        // cost of the consumed prefix against the empty substring
        self.row[0] = self.query_index;

        for i in 1..=self.text.len() {
            if best == 0 {
                break;
            }
            self.row[i] = self.cell(i);

            if self.is_last_row() {
                best = best.min(self.row[i]);
            } else {
                self.track_band(i);
                if self.is_beyond_band(i) {
                    best = best.min(self.solve_band());
                    self.clear_band();
                }
            }
        }

        if self.has_band() {
            best = best.min(self.solve_band());
        }
        best
    }
}

//------------------------------------------------------------------------------
/// Banded substring matcher.
///
/// Scratch rows are kept per thread and reused across calls, so a single matcher
/// can be shared between threads.
#[derive(Debug, Default)]
pub struct BandedMatcher {
    case: CaseMatching,
    no_cache: bool,
    #[allow(clippy::type_complexity)]
    rows: ThreadLocal<RefCell<(Vec<Distance>, Vec<Distance>)>>,
}

impl BandedMatcher {
    /// Creates a matcher with the given case policy.
    pub fn new(case: CaseMatching) -> Self {
        Self {
            case,
            ..Default::default()
        }
    }

    /// Sets the matcher to ignore ASCII case when matching.
    pub fn ignore_case(mut self) -> Self {
        self.case = CaseMatching::Ignore;
        self
    }

    /// Sets the matcher to use smart case (case-insensitive unless the query
    /// contains an uppercase letter).
    pub fn smart_case(mut self) -> Self {
        self.case = CaseMatching::Smart;
        self
    }

    /// Sets the matcher to respect case exactly.
    pub fn respect_case(mut self) -> Self {
        self.case = CaseMatching::Respect;
        self
    }

    /// Enables or disables reuse of the per-thread row buffers between calls.
    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.no_cache = !use_cache;
        self
    }
}

impl SubstringMatcher for BandedMatcher {
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
        row.resize(text.len() + 2, 0);
        row_prev.resize(text.len() + 2, 0);

        let best = Range::initial(query, text, max_distance, respect_case, row, row_prev).process();

        if self.no_cache {
            *rows = (Vec::new(), Vec::new());
        }

        // the last row may bottom out just above the threshold
        (best <= max_distance).then_some(best)
    }
}
