//! Static alias tables mapping known synonyms to canonical category values.

use crate::types::CanonicalValue;

/// Course-name synonyms observed in submissions, mapped to the spellings the
/// model was trained on.
const COURSE_ALIASES: &[(&str, &str)] = &[
    ("bsc", "b.sc"),
    ("b.sc", "b.sc"),
    ("btech", "b.tech"),
    ("b.tech", "b.tech"),
    ("ba", "ba"),
    ("bba", "bba"),
    ("bca", "bca"),
    ("diploma", "diploma"),
];

/// Study-method synonyms, including spaced and hyphenated variants.
const STUDY_METHOD_ALIASES: &[(&str, &str)] = &[
    ("group-study", "group_study"),
    ("group study", "group_study"),
    ("online videos", "online_videos"),
    ("online-videos", "online_videos"),
    ("self-study", "self-study"),
    ("mixed", "mixed"),
];

/// Levels collapsed into a neighbor because training data merged them.
const SLEEP_QUALITY_COLLAPSES: &[(&str, &str)] = &[("average", "poor")];
const FACILITY_RATING_COLLAPSES: &[(&str, &str)] = &[("high", "medium")];
const EXAM_DIFFICULTY_COLLAPSES: &[(&str, &str)] = &[("easy", "moderate")];

/// Resolve a normalized categorical value against the static tables for its
/// field.
///
/// Values with no table entry pass through unchanged: an unrecognized
/// category is not an error here, it simply fails to match any one-hot
/// column at alignment and contributes an all-zero encoding for the field.
pub fn resolve_alias(field: &str, value: &str) -> CanonicalValue {
    let table = match field {
        "course" => COURSE_ALIASES,
        "study_method" => STUDY_METHOD_ALIASES,
        "sleep_quality" => SLEEP_QUALITY_COLLAPSES,
        "facility_rating" => FACILITY_RATING_COLLAPSES,
        "exam_difficulty" => EXAM_DIFFICULTY_COLLAPSES,
        _ => return value.to_string(),
    };
    table
        .iter()
        .find(|(alias, _)| *alias == value)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| value.to_string())
}
