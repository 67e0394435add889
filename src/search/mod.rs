//! Faceted search surface for the media-insights UIs.
//!
//! This module turns UI state into managed-search-API requests and turns the
//! responses into render-ready results:
//!
//! - **Facet selections**: per-attribute value sets and date ranges
//! - **Filter composition**: selections + index schema types into one
//!   boolean attribute filter tree
//! - **Session lifecycle**: facets reset on a new query, persist across
//!   pagination and sort changes
//! - **Backend seam**: the managed search API as an async trait, consumed
//!   rather than reimplemented
//!
//! # Control flow
//!
//! ```text
//! UI selections ──► SelectedFacets ──► FacetFilterBuilder ──► SearchRequest
//!                                                                  │
//!                                        managed search backend ◄──┘
//!                                                                  │
//!          render segments ◄── highlight union ◄── SearchResponse ◄┘
//! ```
//!
//! # Example
//!
//! ```
//! use media_insights_search::models::AttributeValue;
//! use media_insights_search::search::{FacetFilterBuilder, SelectedFacets, TypeLookup};
//!
//! let mut facets = SelectedFacets::new();
//! facets.toggle_value("_file_type", AttributeValue::Text("PDF".to_string()));
//!
//! let lookup = TypeLookup::new();
//! let filter = FacetFilterBuilder::new(&lookup).build(&facets);
//! assert!(filter.is_some());
//! ```

mod config;
mod facets;
mod filter;
mod query;
mod response;
mod service;
mod session;

pub use config::{SearchConfig, SearchConfigBuilder};
pub use facets::SelectedFacets;
pub use filter::{AttributeFilter, AttributeLeaf, FacetFilterBuilder, TypeLookup};
pub use query::{SearchRequest, SearchSort, SortOrder};
pub use response::{
    DataSourceNames, FacetResult, FacetValueCount, ResolveDataSourceName, ScoreCategory,
    SearchHit, SearchResponse,
};
pub use service::{SearchBackend, SearchService};
pub use session::SearchSession;
