/// Name of an input field on the submitted form.
/// Examples: `age`, `course`, `exam_difficulty`
pub type FieldName = String;
/// Raw string value exactly as submitted.
/// Examples: ` BTech `, `Self-Study`, `20`
pub type RawValue = String;
/// Categorical value after trimming, lowercasing, and alias resolution.
/// Examples: `b.tech`, `self-study`, `nan`
pub type CanonicalValue = String;
/// Name of a feature column in the model's schema.
/// Examples: `age`, `course_b.tech`, `sleep_quality_poor`
pub type FeatureName = String;
/// Opaque key identifying one authenticated session.
/// Example: `user@example.com`
pub type SessionKey = String;
/// Model output score.
pub type Score = f64;
/// Rendered UTC timestamp at minute precision.
/// Example: `2026-08-06 14:05 UTC`
pub type Timestamp = String;
