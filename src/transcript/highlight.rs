//! Highlight span reconciliation and excerpt segmentation.
//!
//! The backend reports query-term highlights as possibly-overlapping spans.
//! [`union`] folds them into the minimal disjoint ascending list; [`segments`]
//! then slices the excerpt into alternating plain and emphasized runs for
//! linear rendering.

use crate::models::highlight::slice_utf16;
use crate::models::Highlight;

/// Merge overlapping or touching highlight spans.
///
/// Spans are sorted ascending by begin offset, then folded: a span whose
/// begin lies at or before the current span's end extends it (taking the max
/// end and OR-ing the top-answer flags); anything else starts a new span.
/// The output is ascending, pairwise disjoint, with a gap of at least one
/// code unit between consecutive spans. Empty input returns empty output;
/// the operation is idempotent.
///
/// Offsets outside the excerpt are the caller's contract violation; no
/// bounds are checked here.
pub fn union(mut highlights: Vec<Highlight>) -> Vec<Highlight> {
    highlights.sort_by_key(|h| (h.begin_offset, h.end_offset));

    let mut merged: Vec<Highlight> = Vec::with_capacity(highlights.len());
    for next in highlights {
        match merged.last_mut() {
            Some(current) if current.end_offset >= next.begin_offset => {
                current.end_offset = current.end_offset.max(next.end_offset);
                current.top_answer |= next.top_answer;
            }
            _ => merged.push(next),
        }
    }
    merged
}

/// A run of excerpt text, plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    /// Unhighlighted text.
    Plain(String),

    /// Highlighted text; `top_answer` marks the primary extracted answer.
    Emphasized { text: String, top_answer: bool },
}

/// Slice an excerpt into ordered plain/emphasized segments.
///
/// Highlight offsets are UTF-16 code units. Input spans are merged with
/// [`union`] first, so overlapping input is fine. Empty runs are omitted:
/// a single span covering the whole text yields one emphasized segment.
pub fn segments(text: &str, highlights: &[Highlight]) -> Vec<TextSegment> {
    let merged = union(highlights.to_vec());
    let mut out = Vec::with_capacity(merged.len() * 2 + 1);
    let mut cursor = 0;

    for span in &merged {
        let plain = slice_utf16(text, cursor, span.begin_offset);
        if !plain.is_empty() {
            out.push(TextSegment::Plain(plain.to_string()));
        }
        let emphasized = slice_utf16(text, span.begin_offset, span.end_offset);
        if !emphasized.is_empty() {
            out.push(TextSegment::Emphasized {
                text: emphasized.to_string(),
                top_answer: span.top_answer,
            });
        }
        cursor = cursor.max(span.end_offset);
    }

    let tail = slice_utf16(text, cursor, usize::MAX);
    if !tail.is_empty() {
        out.push(TextSegment::Plain(tail.to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn h(begin: usize, end: usize, top: bool) -> Highlight {
        Highlight::new(begin, end, top)
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(union(Vec::new()), Vec::new());
    }

    #[test]
    fn disjoint_spans_pass_through() {
        let spans = vec![h(0, 3, false), h(5, 8, false)];
        assert_eq!(union(spans.clone()), spans);
    }

    #[test]
    fn overlapping_and_touching_spans_merge() {
        let spans = vec![h(0, 4, false), h(2, 6, false), h(10, 12, true)];
        assert_eq!(union(spans), vec![h(0, 6, false), h(10, 12, true)]);

        // Touching (end == begin) also merges.
        let spans = vec![h(0, 4, false), h(4, 7, false)];
        assert_eq!(union(spans), vec![h(0, 7, false)]);
    }

    #[test]
    fn top_answer_flag_survives_merging() {
        let spans = vec![h(0, 4, true), h(2, 6, false)];
        assert_eq!(union(spans), vec![h(0, 6, true)]);
    }

    #[test]
    fn unsorted_input_is_sorted_first() {
        let spans = vec![h(10, 12, false), h(0, 4, false), h(2, 6, false)];
        assert_eq!(union(spans), vec![h(0, 6, false), h(10, 12, false)]);
    }

    #[test]
    fn contained_span_does_not_shrink_current() {
        let spans = vec![h(0, 10, false), h(2, 4, false)];
        assert_eq!(union(spans), vec![h(0, 10, false)]);
    }

    #[test]
    fn segments_alternate_plain_and_emphasized() {
        let segs = segments("hello bold world", &[h(6, 10, false)]);
        assert_eq!(
            segs,
            vec![
                TextSegment::Plain("hello ".to_string()),
                TextSegment::Emphasized {
                    text: "bold".to_string(),
                    top_answer: false
                },
                TextSegment::Plain(" world".to_string()),
            ]
        );
    }

    #[test]
    fn full_span_yields_single_emphasized_segment() {
        let segs = segments("answer", &[h(0, 6, true)]);
        assert_eq!(
            segs,
            vec![TextSegment::Emphasized {
                text: "answer".to_string(),
                top_answer: true
            }]
        );
    }

    #[test]
    fn no_highlights_yields_one_plain_segment() {
        let segs = segments("just text", &[]);
        assert_eq!(segs, vec![TextSegment::Plain("just text".to_string())]);
    }

    fn arb_spans() -> impl Strategy<Value = Vec<Highlight>> {
        proptest::collection::vec(
            (0usize..200, 0usize..32, any::<bool>())
                .prop_map(|(begin, len, top)| Highlight::new(begin, begin + len, top)),
            0..24,
        )
    }

    proptest! {
        #[test]
        fn union_is_idempotent(spans in arb_spans()) {
            let once = union(spans);
            let twice = union(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn union_output_is_disjoint_with_gap(spans in arb_spans()) {
            let merged = union(spans);
            for pair in merged.windows(2) {
                prop_assert!(pair[0].end_offset < pair[1].begin_offset);
            }
        }

        #[test]
        fn union_preserves_covered_offsets(spans in arb_spans()) {
            use std::collections::BTreeSet;
            let before: BTreeSet<usize> = spans
                .iter()
                .flat_map(|s| s.begin_offset..s.end_offset)
                .collect();
            let merged = union(spans);
            let after: BTreeSet<usize> = merged
                .iter()
                .flat_map(|s| s.begin_offset..s.end_offset)
                .collect();
            prop_assert_eq!(before, after);
        }
    }
}
