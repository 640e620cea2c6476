use crate::data::HistoryEntry;

/// Aggregate summary of a session's recorded scores.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub latest: f64,
}

/// Summarize recorded history entries for display.
/// Returns `None` for an empty history.
pub fn score_summary(entries: &[HistoryEntry]) -> Option<ScoreSummary> {
    if entries.is_empty() {
        return None;
    }
    let count = entries.len();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for entry in entries {
        min = min.min(entry.score);
        max = max.max(entry.score);
        sum += entry.score;
    }
    Some(ScoreSummary {
        count,
        min,
        max,
        mean: sum / count as f64,
        latest: entries[count - 1].score,
    })
}
