/// Constants describing the fixed input-field layout of the form.
pub mod fields {
    /// Numeric input fields, parsed as floating point.
    pub const NUMERIC_FIELDS: [&str; 4] = ["age", "study_hours", "class_attendance", "sleep_hours"];
    /// Categorical input fields, normalized and one-hot expanded.
    pub const CATEGORICAL_FIELDS: [&str; 7] = [
        "gender",
        "course",
        "internet_access",
        "sleep_quality",
        "study_method",
        "facility_rating",
        "exam_difficulty",
    ];
    /// Stand-in category for an absent categorical field.
    ///
    /// The model was trained with missing categoricals stringified this way,
    /// so absence is a distinct category rather than an error.
    pub const MISSING_CATEGORY: &str = "nan";
    /// Separator between a field name and its value in one-hot column names
    /// (for example `course_b.tech`).
    pub const ONE_HOT_SEPARATOR: &str = "_";
}

/// Constants governing per-session prediction history.
pub mod history {
    /// Default maximum number of retained history entries per session.
    pub const DEFAULT_HISTORY_LIMIT: usize = 10;
    /// `chrono` format string for rendered history timestamps.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";
}

/// Constants naming the model artifacts loaded at startup.
pub mod artifacts {
    /// Default filename for the serialized model coefficients.
    pub const DEFAULT_MODEL_FILENAME: &str = "score_model.json";
    /// Default filename for the ordered feature-column schema.
    pub const DEFAULT_SCHEMA_FILENAME: &str = "model_columns.json";
}

/// Constants for session-store key layout.
pub mod session {
    /// Key under which a session's prediction history is stored.
    pub const HISTORY_KEY: &str = "prediction_history";
}
