//! # media-insights-search
//!
//! Client-side search core for media-insights applications: a faceted media
//! search UI and a call-analytics transcript review UI share this crate for
//! the transformations between UI state and the managed search backend.
//!
//! - **Filter composition** ([`search`]): user facet selections plus the
//!   index schema become one boolean attribute filter tree in the backend's
//!   wire shape
//! - **Session lifecycle** ([`search::SearchSession`]): facets reset on a
//!   new query and persist across pagination and sort changes
//! - **Highlight reconciliation** ([`transcript`]): overlapping highlight
//!   spans merge into a minimal disjoint list for linear rendering
//! - **Span overlays** ([`transcript::overlay`]): detector-tagged transcript
//!   ranges render as replaceable fragments with source offsets intact
//!
//! The managed search, storage, and key-value services are consumed
//! collaborators behind small traits; this crate implements no network
//! client, storage layer, or authentication flow.

pub mod error;
pub mod models;
pub mod search;
pub mod transcript;

pub use error::{SearchError, SearchResult};
