//! UI search session state.
//!
//! The session owns everything the search page remembers between requests:
//! the free-text query, the current page, the sort choice, and the facet
//! selections. Submitting a new query resets the facets and returns to the
//! first page; paging and sorting preserve the facets; editing a facet
//! returns to the first page.

use crate::models::{AttributeValue, DateRange};
use crate::search::config::SearchConfig;
use crate::search::facets::SelectedFacets;
use crate::search::filter::{FacetFilterBuilder, TypeLookup};
use crate::search::query::{SearchRequest, SearchSort};
use serde::{Deserialize, Serialize};

/// Search state for one UI session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSession {
    query_text: String,
    page: usize,
    sort: SearchSort,
    facets: SelectedFacets,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query_text: String::new(),
            page: 1,
            sort: SearchSort::default(),
            facets: SelectedFacets::new(),
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn sort(&self) -> &SearchSort {
        &self.sort
    }

    pub fn facets(&self) -> &SelectedFacets {
        &self.facets
    }

    /// Submit a new free-text query: facets clear, pagination rewinds.
    pub fn submit_query(&mut self, query_text: impl Into<String>) {
        self.query_text = query_text.into();
        self.facets.clear();
        self.page = 1;
    }

    /// Move to another page of the current query. Facets persist.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the sort. Facets persist, pagination rewinds.
    pub fn set_sort(&mut self, sort: SearchSort) {
        self.sort = sort;
        self.page = 1;
    }

    /// Toggle a facet value. Pagination rewinds.
    pub fn toggle_facet_value(&mut self, attribute: impl Into<String>, value: AttributeValue) {
        self.facets.toggle_value(attribute, value);
        self.page = 1;
    }

    /// Set a date-range facet. Pagination rewinds.
    pub fn set_facet_date_range(&mut self, attribute: impl Into<String>, range: DateRange) {
        self.facets.set_date_range(attribute, range);
        self.page = 1;
    }

    /// Clear one facet attribute. Pagination rewinds.
    pub fn clear_facet(&mut self, attribute: &str) {
        self.facets.clear_attribute(attribute);
        self.page = 1;
    }

    /// Materialize the request this session currently describes.
    pub fn to_request(&self, type_lookup: &TypeLookup, config: &SearchConfig) -> SearchRequest {
        let filter = FacetFilterBuilder::new(type_lookup).build(&self.facets);
        SearchRequest::new(config.index_id.clone(), self.query_text.clone())
            .with_page(self.page)
            .with_page_size(config.page_size)
            .with_sort(self.sort.clone())
            .with_facet_names(config.facet_names.clone())
            .with_filter(filter)
    }
}
