//! Search service: session in, render-ready response out.
//!
//! The managed search backend is a consumed collaborator behind the
//! [`SearchBackend`] trait; this crate ships no network client. The service
//! builds the request from the session state, invokes the backend, then
//! post-processes each hit: highlight spans are merged into a minimal
//! disjoint list and data-source ids are resolved to display names.

use crate::error::SearchResult;
use crate::search::config::SearchConfig;
use crate::search::filter::TypeLookup;
use crate::search::query::SearchRequest;
use crate::search::response::{DataSourceNames, ResolveDataSourceName, SearchResponse};
use crate::search::session::SearchSession;
use crate::transcript::highlight::union;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Seam to the managed search API.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute one search request.
    async fn query(&self, request: &SearchRequest) -> SearchResult<SearchResponse>;
}

/// Orchestrates a search round-trip for a UI session.
pub struct SearchService<B: SearchBackend> {
    backend: B,
    config: SearchConfig,
    type_lookup: TypeLookup,
    data_source_names: DataSourceNames,
}

impl<B: SearchBackend> SearchService<B> {
    /// Create a service over a validated configuration.
    pub fn new(config: SearchConfig, backend: B) -> SearchResult<Self> {
        config.validate()?;
        Ok(Self {
            backend,
            config,
            type_lookup: TypeLookup::new(),
            data_source_names: DataSourceNames::new(),
        })
    }

    /// Provide the index schema's attribute types, used when building filters.
    pub fn with_type_lookup(mut self, type_lookup: TypeLookup) -> Self {
        self.type_lookup = type_lookup;
        self
    }

    /// Provide the data-source display-name mapping.
    pub fn with_data_source_names(mut self, names: DataSourceNames) -> Self {
        self.data_source_names = names;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search a session currently describes.
    #[instrument(skip(self, session), fields(page = session.page(), query_len = session.query_text().len()))]
    pub async fn search(&self, session: &SearchSession) -> SearchResult<SearchResponse> {
        let request = session.to_request(&self.type_lookup, &self.config);
        let mut response = self.backend.query(&request).await?;

        for hit in &mut response.items {
            hit.excerpt.highlights = union(std::mem::take(&mut hit.excerpt.highlights));
            if let Some(title) = &mut hit.title {
                title.highlights = union(std::mem::take(&mut title.highlights));
            }
            if hit.data_source_name.is_none() {
                hit.data_source_name = hit
                    .data_source_id
                    .as_deref()
                    .map(|id| self.data_source_names.display_name(id));
            }
        }

        debug!(hits = response.items.len(), total = response.total_hits, "search completed");
        Ok(response)
    }
}
