//! One-hot expansion of canonical records into named feature maps.

use indexmap::IndexMap;

use crate::constants::fields::ONE_HOT_SEPARATOR;
use crate::data::CanonicalRecord;
use crate::types::FeatureName;

/// Expand a canonical record into an insertion-ordered feature map.
///
/// Numeric fields pass through under their own names (missing values as
/// NaN). Each categorical field contributes exactly one indicator column,
/// `<field>_<value>` = 1; the indicator columns for every other value of
/// that field are implicitly zero and materialize only at alignment. The
/// map may therefore lack columns the schema expects and may carry columns
/// the schema has never seen — both are resolved downstream.
pub fn expand(record: &CanonicalRecord) -> IndexMap<FeatureName, f64> {
    let mut features = IndexMap::new();
    for (field, value) in &record.numeric {
        features.insert(field.clone(), value.as_feature());
    }
    for (field, value) in &record.categorical {
        features.insert(format!("{field}{ONE_HOT_SEPARATOR}{value}"), 1.0);
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::NumericValue;

    fn record() -> CanonicalRecord {
        let mut record = CanonicalRecord::default();
        record
            .numeric
            .insert("age".to_string(), NumericValue::Value(20.0));
        record
            .numeric
            .insert("sleep_hours".to_string(), NumericValue::Missing);
        record
            .categorical
            .insert("course".to_string(), "b.tech".to_string());
        record
    }

    #[test]
    fn numeric_fields_pass_through_unexpanded() {
        let features = expand(&record());
        assert_eq!(features.get("age"), Some(&20.0));
        assert!(features.get("sleep_hours").unwrap().is_nan());
    }

    #[test]
    fn categorical_fields_become_named_indicators() {
        let features = expand(&record());
        assert_eq!(features.get("course_b.tech"), Some(&1.0));
        assert_eq!(features.get("course"), None);
        assert_eq!(features.len(), 3);
    }
}
