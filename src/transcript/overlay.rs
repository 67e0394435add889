//! Detector span overlays for transcript rendering.
//!
//! Analytics detectors (entities, issues, action items, outcomes) each tag
//! sub-ranges of a transcript turn. [`apply`] replaces those ranges with
//! caller-rendered values while passing untouched text through unchanged.
//!
//! Spans from the different detectors are contractually non-overlapping;
//! that precondition is documented and checked only by a debug assertion,
//! never validated at runtime. When it is violated the output ordering is
//! unspecified but deterministic: spans process in ascending start order,
//! ties broken longer-span-first, and a later span starting inside an
//! already-rendered one is clamped forward.

use crate::models::highlight::slice_utf16;
use std::fmt;

/// A sub-range of a transcript turn to replace with a rendered value.
///
/// Offsets are UTF-16 code units of the source text, matching the upstream
/// detector output.
pub struct ReplacementSpan<T> {
    /// Start offset, inclusive.
    pub start: usize,

    /// End offset, exclusive.
    pub end: usize,

    render: Box<dyn Fn(&str) -> T + Send + Sync>,
}

impl<T> ReplacementSpan<T> {
    pub fn new(
        start: usize,
        end: usize,
        render: impl Fn(&str) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            start,
            end,
            render: Box::new(render),
        }
    }
}

impl<T> fmt::Debug for ReplacementSpan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplacementSpan")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

/// One rendered fragment of a transcript turn.
///
/// Rendered fragments keep their absolute source offsets so the UI can
/// correlate a fragment back to the transcript (e.g. to scroll-sync audio
/// playback against the highlighted position).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<T> {
    /// Untouched text between spans.
    Plain(String),

    /// A detector span replaced by its rendered value.
    Rendered { value: T, start: usize, end: usize },
}

/// Apply replacement spans over a transcript turn.
///
/// A single left-to-right pass slices the text at each span boundary,
/// emitting alternating plain and rendered fragments. Empty plain runs
/// between adjacent spans are omitted; `apply(text, vec![])` yields the
/// whole text as one plain fragment.
pub fn apply<T>(text: &str, mut spans: Vec<ReplacementSpan<T>>) -> Vec<Fragment<T>> {
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    debug_assert!(
        spans.windows(2).all(|pair| pair[0].end <= pair[1].start),
        "replacement spans must not overlap"
    );

    let mut fragments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in &spans {
        let start = span.start.max(cursor);
        let end = span.end.max(start);

        let plain = slice_utf16(text, cursor, start);
        if !plain.is_empty() {
            fragments.push(Fragment::Plain(plain.to_string()));
        }

        let source = slice_utf16(text, start, end);
        fragments.push(Fragment::Rendered {
            value: (span.render)(source),
            start: span.start,
            end: span.end,
        });
        cursor = end;
    }

    let tail = slice_utf16(text, cursor, usize::MAX);
    if !tail.is_empty() {
        fragments.push(Fragment::Plain(tail.to_string()));
    }
    fragments
}
