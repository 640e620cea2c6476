//! Model artifacts and the inference contract.
//!
//! The model and its column schema are trained and serialized elsewhere;
//! this module only loads them at startup and exposes the
//! `predict(vector) -> score` seam the service calls through. Both are
//! immutable for the lifetime of the process and safe to share across
//! concurrent requests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::align::Schema;
use crate::config::ServiceConfig;
use crate::data::FeatureVector;
use crate::errors::PipelineError;
use crate::types::Score;

/// Inference contract for a pre-trained scoring model.
///
/// Implementations must be deterministic and stateless: an inference
/// failure is propagated to the caller without retry, since retrying the
/// same vector would not change the outcome.
pub trait ScoreModel: Send + Sync {
    /// Score one schema-aligned feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<Score, PipelineError>;
}

/// On-disk shape of the linear model artifact.
#[derive(Debug, Deserialize)]
struct LinearModelArtifact {
    intercept: f64,
    coefficients: HashMap<String, f64>,
}

/// Linear regression model with one coefficient per schema column.
#[derive(Clone, Debug)]
pub struct LinearModel {
    intercept: f64,
    weights: Vec<f64>,
}

impl LinearModel {
    /// Build a model from an intercept and weights in schema order.
    pub fn new(intercept: f64, weights: Vec<f64>) -> Self {
        Self { intercept, weights }
    }

    /// Load a model artifact and bind its coefficients to `schema` order.
    ///
    /// Every schema column must have a coefficient; a column the artifact
    /// does not know means the two artifacts were produced by different
    /// training runs, which is fatal at startup.
    pub fn load(path: &Path, schema: &Schema) -> Result<Self, PipelineError> {
        let artifact_load = |reason: String| PipelineError::ArtifactLoad {
            path: path.display().to_string(),
            reason,
        };
        let raw = fs::read_to_string(path).map_err(|err| artifact_load(err.to_string()))?;
        let artifact: LinearModelArtifact =
            serde_json::from_str(&raw).map_err(|err| artifact_load(err.to_string()))?;
        let weights = schema
            .columns()
            .iter()
            .map(|column| {
                artifact.coefficients.get(column).copied().ok_or_else(|| {
                    artifact_load(format!("no coefficient for schema column '{column}'"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(path = %path.display(), columns = weights.len(), "model loaded");
        Ok(Self::new(artifact.intercept, weights))
    }
}

impl ScoreModel for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<Score, PipelineError> {
        if features.len() != self.weights.len() {
            return Err(PipelineError::Inference(format!(
                "feature vector has {} columns, model expects {}",
                features.len(),
                self.weights.len()
            )));
        }
        let dot: f64 = self
            .weights
            .iter()
            .zip(features.values())
            .map(|(weight, value)| weight * value)
            .sum();
        Ok(self.intercept + dot)
    }
}

/// Process-wide immutable model state: the schema plus the model bound to it.
///
/// Loaded once at startup and passed by shared reference into the service;
/// never reloaded per request.
pub struct ModelArtifacts {
    /// Ordered feature-column schema.
    pub schema: Schema,
    /// Model implementing the inference contract.
    pub model: Box<dyn ScoreModel>,
}

impl ModelArtifacts {
    /// Load both artifacts from the configured paths.
    pub fn load(config: &ServiceConfig) -> Result<Self, PipelineError> {
        let schema = Schema::load(&config.schema_path)?;
        let model = LinearModel::load(&config.model_path, &schema)?;
        Ok(Self {
            schema,
            model: Box::new(model),
        })
    }

    /// Pair a schema with an externally constructed model implementation.
    pub fn with_model(schema: Schema, model: Box<dyn ScoreModel>) -> Self {
        Self { schema, model }
    }
}
