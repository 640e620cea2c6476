use std::path::PathBuf;

use crate::constants::artifacts::{DEFAULT_MODEL_FILENAME, DEFAULT_SCHEMA_FILENAME};
use crate::constants::history::DEFAULT_HISTORY_LIMIT;

/// Top-level service configuration.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Path to the serialized model artifact.
    pub model_path: PathBuf,
    /// Path to the ordered column-schema artifact.
    pub schema_path: PathBuf,
    /// Maximum prediction-history entries retained per session.
    ///
    /// This bounds what a session store has to persist, so cookie-backed
    /// stores stay within payload limits.
    pub history_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_FILENAME),
            schema_path: PathBuf::from(DEFAULT_SCHEMA_FILENAME),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
