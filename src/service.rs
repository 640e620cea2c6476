//! Request orchestration for the prediction endpoint.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::constants::history::DEFAULT_HISTORY_LIMIT;
use crate::data::{HistoryEntry, RawRecord};
use crate::errors::PipelineError;
use crate::model::ModelArtifacts;
use crate::pipeline;
use crate::session::SessionStore;
use crate::types::Score;

/// What one prediction request returns to the rendering collaborator.
#[derive(Clone, Debug)]
pub struct PredictionOutcome {
    /// Model output for the submitted record.
    pub score: Score,
    /// The session's history after recording, oldest first.
    pub history: Vec<HistoryEntry>,
}

/// Stateless request handler bridging the pipeline, the model, and the
/// session store.
///
/// The artifacts are shared read-only state; the only mutation per request
/// is the owning session's history append, so concurrent requests need no
/// coordination here.
pub struct PredictionService<S: SessionStore> {
    artifacts: Arc<ModelArtifacts>,
    sessions: S,
    history_limit: usize,
}

impl<S: SessionStore> PredictionService<S> {
    /// Create a service over loaded artifacts and a session store.
    pub fn new(artifacts: Arc<ModelArtifacts>, sessions: S) -> Self {
        Self {
            artifacts,
            sessions,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Override the per-session history bound.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Handle one form submission, stamping the history entry with the
    /// current time.
    pub fn predict(&self, session: &str, raw: &RawRecord) -> Result<PredictionOutcome, PipelineError> {
        self.predict_at(session, raw, Utc::now())
    }

    /// Handle one form submission with an explicit clock.
    ///
    /// Runs Normalizing -> Aligning -> Predicting -> Recorded; an inference
    /// failure aborts before Recorded, leaving the stored history untouched.
    pub fn predict_at(
        &self,
        session: &str,
        raw: &RawRecord,
        now: DateTime<Utc>,
    ) -> Result<PredictionOutcome, PipelineError> {
        let features = pipeline::build_features(raw, &self.artifacts.schema);
        let score = self.artifacts.model.predict(&features)?;

        let mut history = self
            .sessions
            .load_history(session)?
            .with_limit(self.history_limit);
        history.record(score, now);
        self.sessions.store_history(session, &history)?;
        debug!(session, score, entries = history.len(), "prediction recorded");

        Ok(PredictionOutcome {
            score,
            history: history.to_vec(),
        })
    }

    /// The session's recorded history, for rendering without predicting.
    pub fn history(&self, session: &str) -> Result<Vec<HistoryEntry>, PipelineError> {
        Ok(self.sessions.load_history(session)?.to_vec())
    }
}
