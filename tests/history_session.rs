use std::sync::Arc;

use chrono::{TimeZone, Utc};

use scorecast::{
    score_summary, BoundedHistory, InMemorySessionStore, LinearModel, ModelArtifacts,
    PredictionService, RawRecord, Schema, SessionStore,
};

/// Identity-ish model: score equals the submitted study_hours value.
fn passthrough_service() -> PredictionService<Arc<InMemorySessionStore>> {
    let schema = Schema::new(vec!["study_hours".to_string()]).unwrap();
    let artifacts =
        ModelArtifacts::with_model(schema, Box::new(LinearModel::new(0.0, vec![1.0])));
    PredictionService::new(Arc::new(artifacts), Arc::new(InMemorySessionStore::default()))
}

fn at_minute(minute: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 10, minute, 0).unwrap()
}

#[test]
fn fifteen_predictions_keep_exactly_the_last_ten() {
    let service = passthrough_service();
    for run in 1..=15u32 {
        let raw = RawRecord::from_pairs([("study_hours", run.to_string())]);
        service
            .predict_at("student@example.com", &raw, at_minute(run))
            .unwrap();
    }

    let history = service.history("student@example.com").unwrap();
    assert_eq!(history.len(), 10);
    let scores: Vec<f64> = history.iter().map(|entry| entry.score).collect();
    let expected: Vec<f64> = (6..=15).map(f64::from).collect();
    assert_eq!(scores, expected);
    assert_eq!(history[0].timestamp, "2025-05-01 10:06 UTC");
}

#[test]
fn sessions_do_not_share_history() {
    let service = passthrough_service();
    let raw = RawRecord::from_pairs([("study_hours", "4")]);
    service.predict_at("a@example.com", &raw, at_minute(0)).unwrap();
    service.predict_at("a@example.com", &raw, at_minute(1)).unwrap();
    service.predict_at("b@example.com", &raw, at_minute(2)).unwrap();

    assert_eq!(service.history("a@example.com").unwrap().len(), 2);
    assert_eq!(service.history("b@example.com").unwrap().len(), 1);
    assert!(service.history("c@example.com").unwrap().is_empty());
}

#[test]
fn history_round_trips_through_a_serialized_payload() {
    let store = InMemorySessionStore::default();
    let mut history = BoundedHistory::default();
    history.record(61.5, at_minute(0));
    history.record(64.0, at_minute(1));

    // A cookie-backed store would ship this payload to the browser and back.
    let payload = serde_json::to_string(&history).unwrap();
    let restored: BoundedHistory = serde_json::from_str(&payload).unwrap();
    store.store_history("student@example.com", &restored).unwrap();

    let loaded = store.load_history("student@example.com").unwrap();
    assert_eq!(loaded.to_vec(), history.to_vec());
}

#[test]
fn summary_reflects_recorded_scores() {
    let service = passthrough_service();
    for (run, hours) in ["2", "8", "5"].iter().enumerate() {
        let raw = RawRecord::from_pairs([("study_hours", *hours)]);
        service
            .predict_at("student@example.com", &raw, at_minute(run as u32))
            .unwrap();
    }
    let history = service.history("student@example.com").unwrap();
    let summary = score_summary(&history).expect("summary");
    assert_eq!(summary.count, 3);
    assert_eq!(summary.min, 2.0);
    assert_eq!(summary.max, 8.0);
    assert_eq!(summary.latest, 5.0);
    assert!((summary.mean - 5.0).abs() < 1e-9);
}
