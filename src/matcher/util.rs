use crate::matcher::Distance;
use crate::{CaseMatching, MAX_LENGTH};

/// Outcome of the entry-point checks shared by every matcher.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Prepared<'a> {
    /// The answer is known without scanning
    Done(Option<Distance>),
    /// Both inputs are non-empty, truncated, and the query is short enough to possibly match
    Scan {
        query: &'a [u8],
        text: &'a [u8],
        respect_case: bool,
    },
}

/// Truncates both inputs to `MAX_LENGTH` and settles the degenerate cases.
pub(crate) fn prepare<'a>(
    query: &'a [u8],
    text: &'a [u8],
    max_distance: Distance,
    case: CaseMatching,
) -> Prepared<'a> {
    let query = &query[..query.len().min(MAX_LENGTH)];
    let text = &text[..text.len().min(MAX_LENGTH)];

    if query.is_empty() {
        // the whole text is charged, not the empty substring
        return Prepared::Done((text.len() <= max_distance).then_some(text.len()));
    }
    if text.is_empty() {
        return Prepared::Done(None);
    }
    if query.len() > text.len().saturating_add(max_distance) {
        // no substring of text can get close enough to a longer query
        return Prepared::Done(None);
    }

    Prepared::Scan {
        query,
        text,
        respect_case: case.respect_case(query),
    }
}

#[inline]
pub(crate) fn fold(byte: u8, respect_case: bool) -> u8 {
    if respect_case { byte } else { byte.to_ascii_lowercase() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_charges_the_text_length() {
        assert_eq!(prepare(b"", b"hi", 3, CaseMatching::Ignore), Prepared::Done(Some(2)));
        assert_eq!(prepare(b"", b"hello", 3, CaseMatching::Ignore), Prepared::Done(None));
        assert_eq!(prepare(b"", b"", 0, CaseMatching::Ignore), Prepared::Done(Some(0)));
    }

    #[test]
    fn empty_text_never_matches() {
        assert_eq!(prepare(b"a", b"", 5, CaseMatching::Ignore), Prepared::Done(None));
    }

    #[test]
    fn long_query_is_pruned() {
        assert_eq!(prepare(b"abcdef", b"xy", 1, CaseMatching::Ignore), Prepared::Done(None));
        assert!(matches!(
            prepare(b"abc", b"xy", 1, CaseMatching::Ignore),
            Prepared::Scan { .. }
        ));
    }

    #[test]
    fn huge_threshold_does_not_overflow() {
        assert!(matches!(
            prepare(b"abc", b"xy", usize::MAX, CaseMatching::Ignore),
            Prepared::Scan { .. }
        ));
    }

    #[test]
    fn inputs_are_truncated() {
        let query = vec![b'q'; MAX_LENGTH + 10];
        let text = vec![b't'; MAX_LENGTH + 20];
        match prepare(&query, &text, 0, CaseMatching::Ignore) {
            Prepared::Scan { query, text, .. } => {
                assert_eq!(query.len(), MAX_LENGTH);
                assert_eq!(text.len(), MAX_LENGTH);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn smart_case_looks_at_the_query() {
        let respect = |q: &'static str| match prepare(q.as_bytes(), b"text", 4, CaseMatching::Smart) {
            Prepared::Scan { respect_case, .. } => respect_case,
            Prepared::Done(_) => unreachable!(),
        };
        assert!(!respect("abc"));
        assert!(respect("aBc"));
    }

    #[test]
    fn fold_is_ascii_only() {
        assert_eq!(fold(b'A', false), b'a');
        assert_eq!(fold(b'A', true), b'A');
        assert_eq!(fold(0xC4, false), 0xC4);
    }
}
