//! Dataset, field descriptors, and numeric sample extraction
//!
//! The dataset is an ordered sequence of records (field key -> value),
//! owned and supplied by the consumer. The core reads it, never mutates it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of value a field holds. Only `Number` fields are selectable for
/// box plot computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Text,
    Bool,
}

impl FieldKind {
    /// Check if this is a numeric kind
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Number)
    }
}

/// Descriptor for a selectable field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Key used to look the field up in each record
    pub key: String,

    /// Human-readable label for selectors and axis titles
    pub label: String,

    /// Kind of value the field holds
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a new field descriptor with the key doubling as its label
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            kind,
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A single value in a record.
///
/// Untagged so record rows deserialize straight from plain JSON objects;
/// anything that is not a finite number is excluded from sample extraction
/// (missing entries are skipped, never treated as zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Missing,
}

impl FieldValue {
    /// The value as a finite f64, if it is one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }
}

/// One record: a mapping from field key to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub HashMap<String, FieldValue>);

impl Record {
    /// Get a value by field key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A tabular dataset: field descriptors plus an ordered sequence of records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Field descriptors
    pub fields: Vec<FieldDescriptor>,

    /// Records in presentation order
    pub records: Vec<Record>,
}

impl Dataset {
    /// Create a new dataset
    pub fn new(fields: Vec<FieldDescriptor>, records: Vec<Record>) -> Self {
        Self { fields, records }
    }

    /// Get a field descriptor by key
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Fields that can be selected for box plot computation
    pub fn numeric_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.kind.is_numeric())
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Extract the ordered numeric samples for one field.
    ///
    /// Records whose value is missing, non-numeric, or non-finite are
    /// silently skipped; this enforces the statistics engine's finite-input
    /// contract. An empty key (no selection) yields no samples. Extraction
    /// is performed fresh on every call, never cached.
    pub fn numeric_samples(&self, key: &str) -> Vec<f64> {
        if key.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter_map(|r| r.get(key).and_then(FieldValue::as_number))
            .collect()
    }
}
