use scorecast::{build_features, canonicalize, NumericValue, RawRecord, Schema};

/// Full training-time column layout: numeric columns first, then the
/// one-hot columns for every category level the model saw.
fn training_schema() -> Schema {
    let columns = [
        "age",
        "study_hours",
        "class_attendance",
        "sleep_hours",
        "gender_female",
        "gender_male",
        "course_b.sc",
        "course_b.tech",
        "course_ba",
        "course_bba",
        "course_bca",
        "course_diploma",
        "internet_access_no",
        "internet_access_yes",
        "sleep_quality_good",
        "sleep_quality_poor",
        "study_method_group_study",
        "study_method_mixed",
        "study_method_online_videos",
        "study_method_self-study",
        "facility_rating_low",
        "facility_rating_medium",
        "exam_difficulty_hard",
        "exam_difficulty_moderate",
    ];
    Schema::new(columns.iter().map(|name| name.to_string()).collect()).unwrap()
}

fn valid_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("age", "20"),
        ("study_hours", "5"),
        ("class_attendance", "80"),
        ("sleep_hours", "7"),
        ("gender", "Male"),
        ("course", "BTech"),
        ("internet_access", "Yes"),
        ("sleep_quality", "Average"),
        ("study_method", "Self-Study"),
        ("facility_rating", "High"),
        ("exam_difficulty", "Easy"),
    ]
}

fn valid_record() -> RawRecord {
    RawRecord::from_pairs(valid_pairs())
}

#[test]
fn feature_vector_shape_is_invariant_under_hostile_input() {
    let schema = training_schema();
    let hostile_records = [
        RawRecord::default(),
        RawRecord::from_pairs([("age", "twenty"), ("course", "PhD")]),
        RawRecord::from_pairs([("unexpected", "field"), ("gender", "  ")]),
        RawRecord::from_pairs([("age", ""), ("study_hours", "NaNish"), ("course", "💥")]),
        valid_record(),
    ];
    for raw in hostile_records {
        let vector = build_features(&raw, &schema);
        assert_eq!(vector.len(), schema.len());
    }
}

#[test]
fn canonical_values_are_fixed_points() {
    let raw = valid_record();
    let first = canonicalize(&raw);

    let second_pass = RawRecord::from_pairs(
        first
            .categorical
            .iter()
            .map(|(field, value)| (field.clone(), value.clone())),
    );
    let second = canonicalize(&second_pass);
    assert_eq!(first.categorical, second.categorical);
}

#[test]
fn alias_spellings_converge_on_one_column() {
    let schema = training_schema();
    let column = schema.position("course_b.tech").unwrap();
    for spelling in ["BTech", "btech", " b.tech ", "B.TECH"] {
        let raw = RawRecord::from_pairs([("course", spelling)]);
        let vector = build_features(&raw, &schema);
        assert_eq!(vector.values()[column], 1.0, "spelling {spelling:?}");
    }
}

#[test]
fn collapsed_levels_land_on_their_canonical_columns() {
    let schema = training_schema();
    let raw = RawRecord::from_pairs([
        ("sleep_quality", "Average"),
        ("facility_rating", "High"),
        ("exam_difficulty", "Easy"),
    ]);
    let vector = build_features(&raw, &schema);
    for column in [
        "sleep_quality_poor",
        "facility_rating_medium",
        "exam_difficulty_moderate",
    ] {
        assert_eq!(vector.values()[schema.position(column).unwrap()], 1.0);
    }
}

#[test]
fn unknown_category_contributes_an_all_zero_field_encoding() {
    let schema = training_schema();
    let mut pairs = valid_pairs();
    for pair in &mut pairs {
        if pair.0 == "course" {
            pair.1 = "phd";
        }
    }
    let vector = build_features(&RawRecord::from_pairs(pairs), &schema);

    // Every course_* column stays zero; the rest of the record is intact.
    for (idx, column) in schema.columns().iter().enumerate() {
        if column.starts_with("course_") {
            assert_eq!(vector.values()[idx], 0.0, "column {column}");
        }
    }
    assert_eq!(
        vector.values()[schema.position("gender_male").unwrap()],
        1.0
    );
}

#[test]
fn missing_numerics_never_error() {
    let schema = training_schema();
    for bad in ["", "abc", "12..5"] {
        let raw = RawRecord::from_pairs([("age", bad)]);
        let record = canonicalize(&raw);
        assert_eq!(record.numeric["age"], NumericValue::Missing);
        let vector = build_features(&raw, &schema);
        assert!(vector.values()[schema.position("age").unwrap()].is_nan());
    }
}
