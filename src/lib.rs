#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Schema alignment and the fixed reference column schema.
pub mod align;
/// Static alias tables and level collapsing for categorical values.
pub mod alias;
/// Numeric field coercion.
pub mod coerce;
/// Service configuration types.
pub mod config;
/// Centralized constants used across fields, history, and artifacts.
pub mod constants;
/// Input, canonical, and feature record types.
pub mod data;
/// One-hot expansion of canonical records.
pub mod encode;
/// Bounded per-session prediction history.
pub mod history;
/// Display summaries over recorded history.
pub mod metrics;
/// Model artifacts and the inference contract.
pub mod model;
/// Categorical normalization helpers.
pub mod normalize;
/// Fixed stage composition from raw record to feature vector.
pub mod pipeline;
/// Request orchestration for the prediction endpoint.
pub mod service;
/// Session-scoped history persistence.
pub mod session;
/// Shared type aliases.
pub mod types;

mod errors;

pub use align::{align, Schema};
pub use config::ServiceConfig;
pub use data::{CanonicalRecord, FeatureVector, HistoryEntry, NumericValue, RawRecord};
pub use errors::PipelineError;
pub use history::BoundedHistory;
pub use metrics::{score_summary, ScoreSummary};
pub use model::{LinearModel, ModelArtifacts, ScoreModel};
pub use pipeline::{build_features, canonicalize};
pub use service::{PredictionOutcome, PredictionService};
pub use session::{InMemorySessionStore, SessionStore};
pub use types::{
    CanonicalValue, FeatureName, FieldName, RawValue, Score, SessionKey, Timestamp,
};
