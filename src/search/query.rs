//! Search request building

use crate::search::filter::AttributeFilter;
use serde::{Deserialize, Serialize};

/// Sort order for search results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sort specification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchSort {
    /// Backend relevance ranking
    Relevance,

    /// Sort by a document attribute
    Attribute { key: String, order: SortOrder },
}

impl Default for SearchSort {
    fn default() -> Self {
        Self::Relevance
    }
}

/// A single search request as sent to the managed search backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Index to query
    pub index_id: String,

    /// Free-text query
    pub query_text: String,

    /// Page number (1-based)
    pub page: usize,

    /// Results per page
    pub page_size: usize,

    /// Attribute filter tree, if any facet produced one
    pub attribute_filter: Option<AttributeFilter>,

    /// Sorting criteria
    pub sort: SearchSort,

    /// Attribute names to return facet counts for
    pub facet_names: Vec<String>,
}

impl SearchRequest {
    /// Create a new request with default pagination and sorting
    pub fn new(index_id: impl Into<String>, query_text: impl Into<String>) -> Self {
        Self {
            index_id: index_id.into(),
            query_text: query_text.into(),
            page: 1,
            page_size: 10,
            attribute_filter: None,
            sort: SearchSort::default(),
            facet_names: Vec::new(),
        }
    }

    /// Set page number
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Attach an attribute filter
    pub fn with_filter(mut self, filter: Option<AttributeFilter>) -> Self {
        self.attribute_filter = filter;
        self
    }

    /// Set sorting
    pub fn with_sort(mut self, sort: SearchSort) -> Self {
        self.sort = sort;
        self
    }

    /// Request facet counts for the given attributes
    pub fn with_facet_names(mut self, names: Vec<impl Into<String>>) -> Self {
        self.facet_names = names.into_iter().map(Into::into).collect();
        self
    }
}
