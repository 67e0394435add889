//! Search configuration

use crate::error::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};

/// Search client configuration.
///
/// Passed explicitly into [`SearchService::new`](crate::search::SearchService::new);
/// there is no global or import-time configuration state. Validation failures
/// surface from the constructor, not at first use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Identifier of the search index to query
    pub index_id: String,

    /// Results per page (1..=100)
    pub page_size: usize,

    /// Attribute names to request facet counts for
    pub facet_names: Vec<String>,

    /// Request highlight spans on result excerpts
    pub enable_highlighting: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_id: String::new(),
            page_size: 10,
            facet_names: Vec::new(),
            enable_highlighting: true,
        }
    }
}

impl SearchConfig {
    /// Check that this configuration can back a search service.
    pub fn validate(&self) -> SearchResult<()> {
        if self.index_id.trim().is_empty() {
            return Err(SearchError::InvalidConfiguration(
                "index_id must not be empty".to_string(),
            ));
        }
        if self.page_size == 0 || self.page_size > 100 {
            return Err(SearchError::InvalidConfiguration(format!(
                "page_size must be between 1 and 100, got {}",
                self.page_size
            )));
        }
        Ok(())
    }
}

/// Builder for SearchConfig
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new(index_id: impl Into<String>) -> Self {
        Self {
            config: SearchConfig {
                index_id: index_id.into(),
                ..SearchConfig::default()
            },
        }
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.config.page_size = size;
        self
    }

    pub fn facet_names(mut self, names: Vec<impl Into<String>>) -> Self {
        self.config.facet_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn enable_highlighting(mut self, enabled: bool) -> Self {
        self.config.enable_highlighting = enabled;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> SearchResult<SearchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
