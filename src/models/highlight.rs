//! Highlight spans over result excerpts.
//!
//! Offsets are UTF-16 code units of the associated text, matching how the
//! upstream search and analytics APIs index their strings. The slicing
//! helpers here translate those offsets to Rust string slices and are shared
//! by the transcript rendering routines.

use serde::{Deserialize, Serialize};

/// A highlighted sub-range of an excerpt, flagged when it is the extracted
/// top answer.
///
/// Invariant (caller-supplied, not validated here):
/// `0 <= begin_offset <= end_offset <= utf16 length of the text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Start of the span, inclusive, in UTF-16 code units.
    #[serde(rename = "BeginOffset")]
    pub begin_offset: usize,

    /// End of the span, exclusive, in UTF-16 code units.
    #[serde(rename = "EndOffset")]
    pub end_offset: usize,

    /// Whether this span is the primary extracted answer.
    #[serde(rename = "TopAnswer", default)]
    pub top_answer: bool,
}

impl Highlight {
    pub fn new(begin_offset: usize, end_offset: usize, top_answer: bool) -> Self {
        Self {
            begin_offset,
            end_offset,
            top_answer,
        }
    }
}

/// An excerpt plus the highlight spans the backend reported for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TextWithHighlights {
    #[serde(rename = "Text")]
    pub text: String,

    #[serde(rename = "Highlights", default)]
    pub highlights: Vec<Highlight>,
}

impl TextWithHighlights {
    pub fn new(text: impl Into<String>, highlights: Vec<Highlight>) -> Self {
        Self {
            text: text.into(),
            highlights,
        }
    }
}

/// Byte index of the char boundary at (or just past) a UTF-16 offset.
///
/// Offsets beyond the end of the text clamp to the end; an offset landing
/// inside a surrogate pair resolves to the boundary after that char.
pub(crate) fn byte_index_at_utf16(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (byte_index, ch) in text.char_indices() {
        if units >= offset {
            return byte_index;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// Slice `text` by a UTF-16 code unit range, clamping out-of-range bounds.
pub(crate) fn slice_utf16(text: &str, begin: usize, end: usize) -> &str {
    if end <= begin {
        return "";
    }
    let start = byte_index_at_utf16(text, begin);
    let stop = byte_index_at_utf16(text, end);
    &text[start..stop]
}
