//! Attribute filter trees and the facet-to-filter builder.
//!
//! [`FacetFilterBuilder`] turns the user's facet selections plus the index's
//! declared attribute types into a single boolean filter expression in the
//! managed search API's wire shape. Building is a pure transformation:
//! malformed or type-mismatched selections are absorbed by fallback and drop
//! rules, never reported as errors.

use crate::models::{AttributeType, AttributeValue};
use crate::search::facets::SelectedFacets;
use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Index schema lookup: attribute name to declared type.
pub type TypeLookup = HashMap<String, AttributeType>;

/// One comparison leaf of a filter tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeLeaf {
    #[serde(rename = "Key")]
    pub key: String,

    #[serde(rename = "Value")]
    pub value: AttributeValue,
}

/// A boolean filter expression over document attributes.
///
/// Serializes to the backend's wire JSON, e.g.
/// `{"EqualsTo":{"Key":"_file_type","Value":{"StringValue":"PDF"}}}`.
/// Values are immutable once built; the builder produces fresh trees per
/// query rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeFilter {
    EqualsTo(AttributeLeaf),
    ContainsAny(AttributeLeaf),
    GreaterThanOrEquals(AttributeLeaf),
    LessThanOrEquals(AttributeLeaf),
    AndAllFilters(Vec<AttributeFilter>),
    OrAllFilters(Vec<AttributeFilter>),
}

impl AttributeFilter {
    pub fn equals(key: impl Into<String>, value: AttributeValue) -> Self {
        AttributeFilter::EqualsTo(AttributeLeaf {
            key: key.into(),
            value,
        })
    }

    pub fn contains_any(key: impl Into<String>, value: AttributeValue) -> Self {
        AttributeFilter::ContainsAny(AttributeLeaf {
            key: key.into(),
            value,
        })
    }

    pub fn greater_than_or_equals(key: impl Into<String>, value: AttributeValue) -> Self {
        AttributeFilter::GreaterThanOrEquals(AttributeLeaf {
            key: key.into(),
            value,
        })
    }

    pub fn less_than_or_equals(key: impl Into<String>, value: AttributeValue) -> Self {
        AttributeFilter::LessThanOrEquals(AttributeLeaf {
            key: key.into(),
            value,
        })
    }
}

/// Builds an optional [`AttributeFilter`] from facet selections.
///
/// Effective type per attribute is the index-declared type from the lookup,
/// falling back to the variant of the first selected value when the lookup
/// has no entry.
pub struct FacetFilterBuilder<'a> {
    type_lookup: &'a TypeLookup,
}

impl<'a> FacetFilterBuilder<'a> {
    pub fn new(type_lookup: &'a TypeLookup) -> Self {
        Self { type_lookup }
    }

    /// Build the filter for a set of selections.
    ///
    /// Returns `None` when no attribute produced a fragment: the request
    /// carries no filter at all, which is distinct from a filter matching
    /// nothing. Otherwise every fragment sits under one top-level
    /// `AndAllFilters`, even when there is only one.
    pub fn build(&self, selected: &SelectedFacets) -> Option<AttributeFilter> {
        let mut fragments: Vec<AttributeFilter> = Vec::new();

        for (attribute, values) in selected.value_selections() {
            if values.is_empty() {
                continue;
            }
            let effective_type = self
                .type_lookup
                .get(attribute)
                .copied()
                .unwrap_or_else(|| values[0].attribute_type());

            if let Some(fragment) = build_fragment(attribute, values, effective_type) {
                fragments.push(fragment);
            }
        }

        for (attribute, range) in selected.date_ranges() {
            fragments.push(AttributeFilter::AndAllFilters(vec![
                AttributeFilter::greater_than_or_equals(
                    attribute,
                    AttributeValue::Date(range.min),
                ),
                AttributeFilter::less_than_or_equals(attribute, AttributeValue::Date(range.max)),
            ]));
        }

        debug!(fragments = fragments.len(), "built attribute filter");
        if fragments.is_empty() {
            None
        } else {
            Some(AttributeFilter::AndAllFilters(fragments))
        }
    }
}

fn build_fragment(
    attribute: &str,
    values: &[AttributeValue],
    effective_type: AttributeType,
) -> Option<AttributeFilter> {
    match effective_type {
        AttributeType::Date => build_date_fragment(attribute, values),
        AttributeType::TextList => Some(build_text_list_fragment(attribute, values)),
        AttributeType::Long => build_long_fragment(attribute, values),
        AttributeType::Text => Some(build_equals_fragment(attribute, values)),
    }
}

/// Date facets always degrade to one inclusive range: even discontinuous
/// selections filter by the min and max of the chosen dates.
fn build_date_fragment(attribute: &str, values: &[AttributeValue]) -> Option<AttributeFilter> {
    let dates: Vec<_> = values.iter().filter_map(AttributeValue::as_date).collect();
    let min = dates.iter().min().copied()?;
    let max = dates.iter().max().copied()?;
    Some(AttributeFilter::AndAllFilters(vec![
        AttributeFilter::greater_than_or_equals(attribute, AttributeValue::Date(min)),
        AttributeFilter::less_than_or_equals(attribute, AttributeValue::Date(max)),
    ]))
}

fn build_text_list_fragment(attribute: &str, values: &[AttributeValue]) -> AttributeFilter {
    let items: Vec<String> = values.iter().map(AttributeValue::to_query_string).collect();
    AttributeFilter::contains_any(attribute, AttributeValue::TextList(items))
}

/// Long facets tolerate mixed representations: a selected value filters by
/// its long form when it has one, else by its text form. `Long(0)` is a
/// present, legitimate value and builds a leaf like any other; only values
/// carrying neither representation are dropped.
fn build_long_fragment(attribute: &str, values: &[AttributeValue]) -> Option<AttributeFilter> {
    let leaves: Vec<AttributeFilter> = values
        .iter()
        .filter(|value| {
            matches!(
                value,
                AttributeValue::Long(_) | AttributeValue::Text(_)
            )
        })
        .map(|value| AttributeFilter::equals(attribute, value.clone()))
        .collect();
    if leaves.is_empty() {
        None
    } else {
        Some(AttributeFilter::OrAllFilters(leaves))
    }
}

fn build_equals_fragment(attribute: &str, values: &[AttributeValue]) -> AttributeFilter {
    AttributeFilter::OrAllFilters(
        values
            .iter()
            .map(|value| AttributeFilter::equals(attribute, value.clone()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn text(s: &str) -> AttributeValue {
        AttributeValue::Text(s.to_string())
    }

    fn lookup(entries: &[(&str, AttributeType)]) -> TypeLookup {
        entries
            .iter()
            .map(|(name, ty)| (name.to_string(), *ty))
            .collect()
    }

    #[test]
    fn empty_selection_builds_no_filter() {
        let lookup = TypeLookup::new();
        let builder = FacetFilterBuilder::new(&lookup);
        assert_eq!(builder.build(&SelectedFacets::new()), None);
    }

    #[test]
    fn string_facet_builds_wrapped_equals() {
        let lookup = lookup(&[("_file_type", AttributeType::Text)]);
        let mut facets = SelectedFacets::new();
        facets.select_value("_file_type", text("PDF"));

        let filter = FacetFilterBuilder::new(&lookup).build(&facets).unwrap();
        let wire = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            wire,
            json!({"AndAllFilters": [{"OrAllFilters": [
                {"EqualsTo": {"Key": "_file_type", "Value": {"StringValue": "PDF"}}}
            ]}]})
        );
    }

    #[test]
    fn multiple_string_values_or_together() {
        let lookup = lookup(&[("_file_type", AttributeType::Text)]);
        let mut facets = SelectedFacets::new();
        facets.select_value("_file_type", text("PDF"));
        facets.select_value("_file_type", text("HTML"));

        let filter = FacetFilterBuilder::new(&lookup).build(&facets).unwrap();
        match filter {
            AttributeFilter::AndAllFilters(fragments) => match &fragments[0] {
                AttributeFilter::OrAllFilters(leaves) => assert_eq!(leaves.len(), 2),
                other => panic!("expected OrAllFilters, got {other:?}"),
            },
            other => panic!("expected AndAllFilters, got {other:?}"),
        }
    }

    #[test]
    fn missing_lookup_entry_falls_back_to_seen_type() {
        let lookup = TypeLookup::new();
        let mut facets = SelectedFacets::new();
        facets.select_value("views", AttributeValue::Long(7));

        let filter = FacetFilterBuilder::new(&lookup).build(&facets).unwrap();
        let wire = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            wire,
            json!({"AndAllFilters": [{"OrAllFilters": [
                {"EqualsTo": {"Key": "views", "Value": {"LongValue": 7}}}
            ]}]})
        );
    }

    #[test]
    fn date_facet_degrades_to_min_max_range() {
        let lookup = lookup(&[("created_at", AttributeType::Date)]);
        let d1 = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        let d2 = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let d3 = Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap();

        let mut facets = SelectedFacets::new();
        facets.select_value("created_at", AttributeValue::Date(d1));
        facets.select_value("created_at", AttributeValue::Date(d2));
        facets.select_value("created_at", AttributeValue::Date(d3));

        let filter = FacetFilterBuilder::new(&lookup).build(&facets).unwrap();
        let expected = AttributeFilter::AndAllFilters(vec![AttributeFilter::AndAllFilters(vec![
            AttributeFilter::greater_than_or_equals("created_at", AttributeValue::Date(d2)),
            AttributeFilter::less_than_or_equals("created_at", AttributeValue::Date(d3)),
        ])]);
        assert_eq!(filter, expected);
    }

    #[test]
    fn date_facet_accepts_parseable_strings_and_drops_the_rest() {
        let lookup = lookup(&[("created_at", AttributeType::Date)]);
        let mut facets = SelectedFacets::new();
        facets.select_value("created_at", text("2023-05-17"));
        facets.select_value("created_at", text("not a date"));

        let filter = FacetFilterBuilder::new(&lookup).build(&facets).unwrap();
        let midnight = Utc.with_ymd_and_hms(2023, 5, 17, 0, 0, 0).unwrap();
        let expected = AttributeFilter::AndAllFilters(vec![AttributeFilter::AndAllFilters(vec![
            AttributeFilter::greater_than_or_equals("created_at", AttributeValue::Date(midnight)),
            AttributeFilter::less_than_or_equals("created_at", AttributeValue::Date(midnight)),
        ])]);
        assert_eq!(filter, expected);
    }

    #[test]
    fn date_facet_with_no_convertible_values_emits_nothing() {
        let lookup = lookup(&[("created_at", AttributeType::Date)]);
        let mut facets = SelectedFacets::new();
        facets.select_value("created_at", text("garbage"));
        assert_eq!(FacetFilterBuilder::new(&lookup).build(&facets), None);
    }

    #[test]
    fn text_list_facet_builds_single_contains_any_in_order() {
        let lookup = lookup(&[("entity", AttributeType::TextList)]);
        let mut facets = SelectedFacets::new();
        facets.select_value("entity", text("a"));
        facets.select_value("entity", text("b"));

        let filter = FacetFilterBuilder::new(&lookup).build(&facets).unwrap();
        let expected = AttributeFilter::AndAllFilters(vec![AttributeFilter::contains_any(
            "entity",
            AttributeValue::TextList(vec!["a".to_string(), "b".to_string()]),
        )]);
        assert_eq!(filter, expected);
    }

    #[test]
    fn text_list_facet_stringifies_mixed_variants() {
        let lookup = lookup(&[("entity", AttributeType::TextList)]);
        let mut facets = SelectedFacets::new();
        facets.select_value(
            "entity",
            AttributeValue::TextList(vec!["x".to_string(), "y".to_string()]),
        );
        facets.select_value("entity", AttributeValue::Long(3));

        let filter = FacetFilterBuilder::new(&lookup).build(&facets).unwrap();
        let expected = AttributeFilter::AndAllFilters(vec![AttributeFilter::contains_any(
            "entity",
            AttributeValue::TextList(vec!["x y".to_string(), "3".to_string()]),
        )]);
        assert_eq!(filter, expected);
    }

    #[test]
    fn long_facet_keeps_zero_and_text_fallback() {
        let lookup = lookup(&[("views", AttributeType::Long)]);
        let mut facets = SelectedFacets::new();
        facets.select_value("views", AttributeValue::Long(0));
        facets.select_value("views", text("12"));
        facets.select_value(
            "views",
            AttributeValue::Date(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
        );

        let filter = FacetFilterBuilder::new(&lookup).build(&facets).unwrap();
        let expected = AttributeFilter::AndAllFilters(vec![AttributeFilter::OrAllFilters(vec![
            AttributeFilter::equals("views", AttributeValue::Long(0)),
            AttributeFilter::equals("views", text("12")),
        ])]);
        assert_eq!(filter, expected);
    }

    #[test]
    fn long_facet_with_no_usable_values_emits_nothing() {
        let lookup = lookup(&[("views", AttributeType::Long)]);
        let mut facets = SelectedFacets::new();
        facets.select_value(
            "views",
            AttributeValue::Date(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
        );
        assert_eq!(FacetFilterBuilder::new(&lookup).build(&facets), None);
    }

    #[test]
    fn explicit_date_range_builds_bounds_pair() {
        let lookup = TypeLookup::new();
        let min = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2023, 6, 30, 0, 0, 0).unwrap();
        let mut facets = SelectedFacets::new();
        facets.set_date_range("created_at", DateRange::new(min, max));

        let filter = FacetFilterBuilder::new(&lookup).build(&facets).unwrap();
        let expected = AttributeFilter::AndAllFilters(vec![AttributeFilter::AndAllFilters(vec![
            AttributeFilter::greater_than_or_equals("created_at", AttributeValue::Date(min)),
            AttributeFilter::less_than_or_equals("created_at", AttributeValue::Date(max)),
        ])]);
        assert_eq!(filter, expected);
    }

    #[test]
    fn fragments_from_multiple_attributes_and_together() {
        let lookup = lookup(&[
            ("_file_type", AttributeType::Text),
            ("entity", AttributeType::TextList),
        ]);
        let mut facets = SelectedFacets::new();
        facets.select_value("entity", text("acme"));
        facets.select_value("_file_type", text("PDF"));

        let filter = FacetFilterBuilder::new(&lookup).build(&facets).unwrap();
        match filter {
            AttributeFilter::AndAllFilters(fragments) => {
                assert_eq!(fragments.len(), 2);
                // Attribute-name order: _file_type before entity.
                assert!(matches!(fragments[0], AttributeFilter::OrAllFilters(_)));
                assert!(matches!(fragments[1], AttributeFilter::ContainsAny(_)));
            }
            other => panic!("expected AndAllFilters, got {other:?}"),
        }
    }

    #[test]
    fn filter_round_trips_through_wire_json() {
        let filter = AttributeFilter::AndAllFilters(vec![AttributeFilter::OrAllFilters(vec![
            AttributeFilter::equals("_file_type", text("PDF")),
        ])]);
        let wire = serde_json::to_string(&filter).unwrap();
        let back: AttributeFilter = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, filter);
    }
}
