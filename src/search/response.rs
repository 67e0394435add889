//! Search response models and data-source name resolution.

use crate::models::{AttributeValue, DocumentAttribute, TextWithHighlights};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Backend confidence bucket for a hit's relevance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoreCategory {
    #[serde(rename = "VERY_HIGH")]
    VeryHigh,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "NOT_AVAILABLE")]
    #[default]
    NotAvailable,
}

/// Count of results carrying one attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValueCount {
    pub value: AttributeValue,
    pub count: u64,
}

/// Facet counts for a single attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetResult {
    pub attribute: String,
    pub value_counts: Vec<FacetValueCount>,
}

/// A single search result item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document identifier
    pub id: String,

    /// Document title with its highlight spans, when the backend returns one
    pub title: Option<TextWithHighlights>,

    /// Result excerpt with its highlight spans
    pub excerpt: TextWithHighlights,

    /// Named attribute values on the document
    pub attributes: Vec<DocumentAttribute>,

    /// Identifier of the data source the document came from
    pub data_source_id: Option<String>,

    /// Display name resolved for `data_source_id` (service-populated)
    #[serde(default)]
    pub data_source_name: Option<String>,

    /// Relevance bucket
    #[serde(default)]
    pub score: ScoreCategory,
}

/// Response to one search request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    /// Result items for the requested page
    pub items: Vec<SearchHit>,

    /// Total matching documents before pagination
    pub total_hits: usize,

    /// Facet counts for the requested attributes
    pub facet_results: Vec<FacetResult>,
}

/// Resolves data-source identifiers to display names.
pub trait ResolveDataSourceName: Send + Sync {
    /// Display name for an id; implementations fall back to the raw id.
    fn display_name(&self, id: &str) -> String;
}

/// In-memory id-to-name mapping backed by the management API's listing.
#[derive(Debug, Clone, Default)]
pub struct DataSourceNames {
    names: HashMap<String, String>,
}

impl DataSourceNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }
}

impl FromIterator<(String, String)> for DataSourceNames {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl ResolveDataSourceName for DataSourceNames {
    fn display_name(&self, id: &str) -> String {
        self.names.get(id).cloned().unwrap_or_else(|| id.to_string())
    }
}
