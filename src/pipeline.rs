//! Fixed composition of the transformation stages.
//!
//! Each stage is a pure function from one record shape to the next:
//! normalization -> alias resolution -> numeric coercion -> one-hot
//! expansion -> schema alignment. Per-input anomalies are absorbed along
//! the way, so the composition is total: any raw record produces a
//! shape-correct feature vector.

use crate::align::{self, Schema};
use crate::alias::resolve_alias;
use crate::coerce::coerce_numeric;
use crate::constants::fields::{CATEGORICAL_FIELDS, NUMERIC_FIELDS};
use crate::data::{CanonicalRecord, FeatureVector, RawRecord};
use crate::encode;
use crate::normalize::normalize_category;

/// Normalize, alias-resolve, and coerce a raw record.
///
/// Only the known field names are consulted; anything else on the record is
/// ignored. Field order in the output follows the fixed field tables, which
/// keeps expansion deterministic across requests.
pub fn canonicalize(raw: &RawRecord) -> CanonicalRecord {
    let mut record = CanonicalRecord::default();
    for field in NUMERIC_FIELDS {
        record
            .numeric
            .insert(field.to_string(), coerce_numeric(raw.get(field)));
    }
    for field in CATEGORICAL_FIELDS {
        let normalized = normalize_category(raw.get(field));
        record
            .categorical
            .insert(field.to_string(), resolve_alias(field, &normalized));
    }
    record
}

/// Run the full pipeline from raw record to schema-aligned feature vector.
pub fn build_features(raw: &RawRecord, schema: &Schema) -> FeatureVector {
    let canonical = canonicalize(raw);
    let expanded = encode::expand(&canonical);
    align::align(&expanded, schema)
}
