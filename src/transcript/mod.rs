//! Transcript and excerpt rendering transformations.
//!
//! Two pure routines back the transcript review UI:
//!
//! - **Highlight reconciliation**: merge the backend's overlapping highlight
//!   spans into a minimal disjoint list, then slice an excerpt into
//!   plain/emphasized render segments
//! - **Span overlays**: replace non-overlapping detector spans (entities,
//!   issues, action items, outcomes) with caller-rendered values
//!
//! Both operate on already-materialized in-memory data, never block or
//! perform I/O, and are safe to call per rendered result item.

pub mod highlight;
pub mod overlay;

pub use highlight::{segments, union, TextSegment};
pub use overlay::{apply, Fragment, ReplacementSpan};
