use thiserror::Error;

/// Error type for artifact loading, inference, and session persistence failures.
///
/// Per-input anomalies (unparseable numerics, unknown categories) are absorbed
/// by the pipeline stages and never appear here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("artifact '{path}' failed to load: {reason}")]
    ArtifactLoad { path: String, reason: String },
    #[error("schema artifact is invalid: {0}")]
    SchemaInvalid(String),
    #[error("model inference failed: {0}")]
    Inference(String),
    #[error("session store failure: {0}")]
    SessionStore(String),
}
