//! User-selected facet state.
//!
//! A facet selection is either a set of discrete attribute values (string
//! facets, toggled on and off in the UI) or a single inclusive date range
//! (date facets). An attribute name lives in at most one of the two maps at
//! a time; selecting one kind clears the other for that name.

use crate::models::{AttributeValue, DateRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The facet selections of one search session.
///
/// Value lists preserve insertion order (so built filters keep the order the
/// user clicked in); attribute names iterate in sorted order so a given
/// selection always produces the same filter tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedFacets {
    values: BTreeMap<String, Vec<AttributeValue>>,
    date_ranges: BTreeMap<String, DateRange>,
}

impl SelectedFacets {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no attribute has any selection.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.date_ranges.is_empty()
    }

    /// Number of attributes with at least one selection.
    pub fn len(&self) -> usize {
        self.values.len() + self.date_ranges.len()
    }

    /// Add a value to an attribute's selection if not already selected.
    ///
    /// Clears any date range previously set for the attribute.
    pub fn select_value(&mut self, attribute: impl Into<String>, value: AttributeValue) {
        let attribute = attribute.into();
        self.date_ranges.remove(&attribute);
        let selected = self.values.entry(attribute).or_default();
        if !selected.contains(&value) {
            selected.push(value);
        }
    }

    /// Remove a value from an attribute's selection, dropping the attribute
    /// entirely once its last value is removed.
    pub fn deselect_value(&mut self, attribute: &str, value: &AttributeValue) {
        if let Some(selected) = self.values.get_mut(attribute) {
            selected.retain(|v| v != value);
            if selected.is_empty() {
                self.values.remove(attribute);
            }
        }
    }

    /// Toggle a value in an attribute's selection.
    pub fn toggle_value(&mut self, attribute: impl Into<String>, value: AttributeValue) {
        let attribute = attribute.into();
        let currently_selected = self
            .values
            .get(&attribute)
            .is_some_and(|selected| selected.contains(&value));
        if currently_selected {
            self.deselect_value(&attribute, &value);
        } else {
            self.select_value(attribute, value);
        }
    }

    /// Set the date range for an attribute, replacing any value selection.
    pub fn set_date_range(&mut self, attribute: impl Into<String>, range: DateRange) {
        let attribute = attribute.into();
        self.values.remove(&attribute);
        self.date_ranges.insert(attribute, range);
    }

    /// Drop every selection for one attribute.
    pub fn clear_attribute(&mut self, attribute: &str) {
        self.values.remove(attribute);
        self.date_ranges.remove(attribute);
    }

    /// Drop all selections.
    pub fn clear(&mut self) {
        self.values.clear();
        self.date_ranges.clear();
    }

    /// Whether a specific value is currently selected for an attribute.
    pub fn is_selected(&self, attribute: &str, value: &AttributeValue) -> bool {
        self.values
            .get(attribute)
            .is_some_and(|selected| selected.contains(value))
    }

    /// Iterate value selections in attribute-name order.
    pub fn value_selections(&self) -> impl Iterator<Item = (&str, &[AttributeValue])> {
        self.values
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Iterate date ranges in attribute-name order.
    pub fn date_ranges(&self) -> impl Iterator<Item = (&str, &DateRange)> {
        self.date_ranges.iter().map(|(name, range)| (name.as_str(), range))
    }
}
