//! Numeric field coercion.

use crate::data::NumericValue;

/// Parse one raw numeric submission as floating point.
///
/// Absence, an empty string, or any unparseable text produces the missing
/// sentinel instead of an error; the model was trained with a strategy for
/// missing numerics, so coercion only flags, it never imputes. Successful
/// parses pass through without clamping or unit conversion.
pub fn coerce_numeric(raw: Option<&str>) -> NumericValue {
    let Some(raw) = raw else {
        return NumericValue::Missing;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) => NumericValue::Value(value),
        Err(_) => NumericValue::Missing,
    }
}
