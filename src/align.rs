//! Schema alignment: the correctness contract of the whole pipeline.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::data::FeatureVector;
use crate::errors::PipelineError;
use crate::types::FeatureName;

/// Ordered, fixed sequence of feature-column names established at model
/// training time.
///
/// Loaded once at startup and read-only for the lifetime of the process.
/// Column lists must be non-empty and duplicate-free; anything else is a
/// startup precondition failure, never a per-request one.
#[derive(Clone, Debug)]
pub struct Schema {
    columns: Vec<FeatureName>,
    positions: HashMap<FeatureName, usize>,
}

impl Schema {
    /// Build a schema from an ordered column list.
    pub fn new(columns: Vec<FeatureName>) -> Result<Self, PipelineError> {
        if columns.is_empty() {
            return Err(PipelineError::SchemaInvalid("empty column list".into()));
        }
        let mut positions = HashMap::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if positions.insert(column.clone(), idx).is_some() {
                return Err(PipelineError::SchemaInvalid(format!(
                    "duplicate column '{column}'"
                )));
            }
        }
        Ok(Self { columns, positions })
    }

    /// Load a schema from a JSON artifact holding an array of column names.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let artifact_load = |reason: String| PipelineError::ArtifactLoad {
            path: path.display().to_string(),
            reason,
        };
        let raw = fs::read_to_string(path).map_err(|err| artifact_load(err.to_string()))?;
        let columns: Vec<FeatureName> =
            serde_json::from_str(&raw).map_err(|err| artifact_load(err.to_string()))?;
        let schema = Self::new(columns)?;
        debug!(path = %path.display(), columns = schema.len(), "schema loaded");
        Ok(schema)
    }

    /// Column names in model order.
    pub fn columns(&self) -> &[FeatureName] {
        &self.columns
    }

    /// Position of `column` in the vector, if the schema contains it.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` for a schema with no columns (unreachable through the
    /// validated constructors).
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Align an expanded feature map to the schema.
///
/// For each schema column in order: the map's value if present, else 0.
/// Map keys the schema does not know are dropped; a category never seen in
/// training cannot be represented, so it is discarded rather than failed.
/// The output length always equals the schema length, which is what lets
/// the model consume the vector without per-call shape validation.
pub fn align(features: &IndexMap<FeatureName, f64>, schema: &Schema) -> FeatureVector {
    let values = schema
        .columns()
        .iter()
        .map(|column| features.get(column).copied().unwrap_or(0.0))
        .collect();
    let dropped = features
        .keys()
        .filter(|name| schema.position(name).is_none())
        .count();
    if dropped > 0 {
        debug!(dropped, "feature columns absent from schema were discarded");
    }
    FeatureVector::new(values)
}
