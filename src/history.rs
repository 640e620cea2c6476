//! Bounded per-session prediction history.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::history::{DEFAULT_HISTORY_LIMIT, TIMESTAMP_FORMAT};
use crate::data::HistoryEntry;
use crate::types::Score;

/// Append-only, size-bounded log of past predictions for one session.
///
/// Insertion-ordered; once the bound is exceeded the oldest entries are
/// evicted first. Serializes as a bare entry array so session stores can
/// persist it as an opaque payload (the bound itself is process
/// configuration, not session state).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundedHistory {
    entries: VecDeque<HistoryEntry>,
    #[serde(skip, default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for BoundedHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl BoundedHistory {
    /// Create an empty history bounded to `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Re-bound this history, trimming oldest entries if already over.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self.enforce_limit();
        self
    }

    /// Append a prediction made at `now`, evicting from the front past the
    /// bound.
    pub fn record(&mut self, score: Score, now: DateTime<Utc>) {
        self.entries.push_back(HistoryEntry {
            score,
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        });
        self.enforce_limit();
    }

    /// Entries in insertion order, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Clone entries into a plain vector for display.
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured bound.
    pub fn limit(&self) -> usize {
        self.limit
    }

    fn enforce_limit(&mut self) {
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }
}
