//! Categorical normalization shared by the pipeline stages.

use crate::constants::fields::MISSING_CATEGORY;
use crate::types::CanonicalValue;

/// Canonicalize one raw categorical submission: trim and lowercase.
///
/// An absent field becomes the literal `"nan"` category rather than an
/// error; the model treats missingness as its own category. Unknown values
/// are not rejected here — validation is deferred to alignment, where an
/// unmatched value contributes an all-zero encoding.
pub fn normalize_category(raw: Option<&str>) -> CanonicalValue {
    match raw {
        Some(value) => value.trim().to_lowercase(),
        None => MISSING_CATEGORY.to_string(),
    }
}
