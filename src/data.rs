use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use crate::types::{CanonicalValue, FeatureName, FieldName, RawValue, Score, Timestamp};

/// Untyped input record exactly as submitted by the form collaborator.
///
/// One value per known field name; fields may be absent and values may carry
/// arbitrary casing and whitespace. Nothing is validated here.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: HashMap<FieldName, RawValue>,
}

impl RawRecord {
    /// Build a record from `(field, value)` pairs. Later duplicates win.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldName>,
        V: Into<RawValue>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Return the raw value submitted for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns `true` when no fields were submitted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A coerced numeric field value: parsed, or explicitly missing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum NumericValue {
    /// Successfully parsed floating-point value, passed through unmodified.
    Value(f64),
    /// Sentinel for an absent or unparseable submission.
    Missing,
}

impl NumericValue {
    /// Render this value for a feature map.
    ///
    /// `Missing` renders as NaN, the representation the model was trained
    /// against for missing numerics.
    pub fn as_feature(&self) -> f64 {
        match self {
            NumericValue::Value(value) => *value,
            NumericValue::Missing => f64::NAN,
        }
    }

    /// Returns `true` for the missing sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, NumericValue::Missing)
    }
}

/// A `RawRecord` after normalization, alias resolution, and numeric coercion.
///
/// Field iteration order is stable (insertion order of the known-field
/// tables), which keeps downstream one-hot expansion deterministic.
#[derive(Clone, Debug, Default)]
pub struct CanonicalRecord {
    /// Coerced numeric fields, keyed by field name.
    pub numeric: IndexMap<FieldName, NumericValue>,
    /// Canonicalized categorical fields, keyed by field name.
    pub categorical: IndexMap<FieldName, CanonicalValue>,
}

/// Fixed-shape numeric input to the model.
///
/// Constructed only by schema alignment, so its length and column order
/// always match the schema it was aligned against.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Column values in schema order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` for a zero-column vector.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One recorded prediction, as rendered to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Model output score.
    pub score: Score,
    /// UTC timestamp at minute precision (see `constants::history`).
    pub timestamp: Timestamp,
}
