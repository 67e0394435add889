//! Document attribute values and their index-declared types.
//!
//! The managed search API represents attribute values as an object with
//! exactly one of `StringValue`, `StringListValue`, `LongValue`, or
//! `DateValue` populated. Here that is an explicit tagged union, so "which
//! field is set" is settled at compile time rather than checked at runtime.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A single attribute value attached to a document or a facet selection.
///
/// Equality is variant-aware: values of different variants are never equal,
/// even when their textual forms coincide (`Text("7")` != `Long(7)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Free-form string value.
    #[serde(rename = "StringValue")]
    Text(String),

    /// Ordered list of string values.
    #[serde(rename = "StringListValue")]
    TextList(Vec<String>),

    /// 64-bit integer value.
    #[serde(rename = "LongValue")]
    Long(i64),

    /// Timestamp value (wire form is ISO-8601 UTC).
    #[serde(rename = "DateValue")]
    Date(DateTime<Utc>),
}

impl AttributeValue {
    /// Interpret this value as a date, if possible.
    ///
    /// `Date` values convert directly. `Text` values convert when they parse
    /// as RFC 3339 or as a bare `YYYY-MM-DD` (taken as midnight UTC). Lists
    /// and longs are never date-convertible.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            AttributeValue::Date(date) => Some(*date),
            AttributeValue::Text(text) => parse_date(text),
            _ => None,
        }
    }

    /// The string form used when this value is folded into a string-list
    /// facet filter: text as-is, lists joined with single spaces, longs in
    /// decimal, dates as UTC ISO-8601.
    pub fn to_query_string(&self) -> String {
        match self {
            AttributeValue::Text(text) => text.clone(),
            AttributeValue::TextList(items) => items.join(" "),
            AttributeValue::Long(value) => value.to_string(),
            AttributeValue::Date(date) => date.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// The type an index would have to declare for this variant.
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            AttributeValue::Text(_) => AttributeType::Text,
            AttributeValue::TextList(_) => AttributeType::TextList,
            AttributeValue::Long(_) => AttributeType::Long,
            AttributeValue::Date(_) => AttributeType::Date,
        }
    }
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Attribute type as declared by the index schema.
///
/// Declared per field, independent of any single observed value's variant
/// (an index may store a field as `Long` while a particular observed value
/// arrives as a numeric string).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum AttributeType {
    #[serde(rename = "STRING_VALUE")]
    #[strum(serialize = "STRING_VALUE")]
    Text,

    #[serde(rename = "STRING_LIST_VALUE")]
    #[strum(serialize = "STRING_LIST_VALUE")]
    TextList,

    #[serde(rename = "LONG_VALUE")]
    #[strum(serialize = "LONG_VALUE")]
    Long,

    #[serde(rename = "DATE_VALUE")]
    #[strum(serialize = "DATE_VALUE")]
    Date,
}

/// A named attribute as returned on a search result item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAttribute {
    /// Attribute name.
    #[serde(rename = "Key")]
    pub key: String,

    /// Attribute value.
    #[serde(rename = "Value")]
    pub value: AttributeValue,
}

impl DocumentAttribute {
    pub fn new(key: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// An inclusive date range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub min: DateTime<Utc>,
    pub max: DateTime<Utc>,
}

impl DateRange {
    /// Create a range from two endpoints, reordering them if needed.
    pub fn new(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }
}
