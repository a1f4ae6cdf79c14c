use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::diff::DiffResult;
use crate::error::{ErrorCode, ForgeError, Result};
use crate::flows::{OptimizeOutcome, OptimizeRequest};

/// Capacity of every store; the oldest record is evicted first.
pub const MAX_HISTORY_ITEMS: usize = 50;

const MAX_HISTORY_FILE_SIZE: u64 = 5_000_000; // 5 MB limit

/// One completed optimization run: the input, what came back, and the
/// computed diff. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub input: OptimizeRequest,
    pub outcome: OptimizeOutcome,
    pub summary: String,
    pub diff: DiffResult,
}

impl OptimizationRecord {
    #[must_use]
    pub fn new(
        input: OptimizeRequest,
        outcome: OptimizeOutcome,
        summary: String,
        diff: DiffResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            input,
            outcome,
            summary,
            diff,
        }
    }
}

/// Injected store interface: append, list, clear. Implementations own
/// the capacity rule so every caller sees the same eviction behavior.
pub trait HistoryStore {
    /// Prepends a record, evicting the oldest once past [`MAX_HISTORY_ITEMS`].
    fn add(&mut self, record: OptimizationRecord) -> Result<()>;

    /// Returns records newest-first.
    fn list(&self) -> Result<Vec<OptimizationRecord>>;

    fn clear(&mut self) -> Result<()>;
}

/// In-process store, mainly for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Vec<OptimizationRecord>,
}

impl MemoryHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn add(&mut self, record: OptimizationRecord) -> Result<()> {
        self.records.insert(0, record);
        self.records.truncate(MAX_HISTORY_ITEMS);
        Ok(())
    }

    fn list(&self) -> Result<Vec<OptimizationRecord>> {
        Ok(self.records.clone())
    }

    fn clear(&mut self) -> Result<()> {
        self.records.clear();
        Ok(())
    }
}

/// Single-file JSON store. Every mutation is written through, so a crash
/// never loses more than the in-flight record.
#[derive(Debug)]
pub struct JsonHistory {
    path: PathBuf,
    records: Vec<OptimizationRecord>,
}

impl JsonHistory {
    /// Loads the store at `path`, or starts empty if the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        let records = if path.exists() {
            let metadata = fs::metadata(path).map_err(|e| ForgeError::History {
                code: ErrorCode::HistoryReadFailed,
                message: format!("Could not read history file metadata: {e}"),
                path: path.to_path_buf(),
            })?;
            if metadata.len() > MAX_HISTORY_FILE_SIZE {
                return Err(ForgeError::History {
                    code: ErrorCode::BoundsExceeded,
                    message: "History file size exceeds limit".to_string(),
                    path: path.to_path_buf(),
                });
            }

            let content = fs::read_to_string(path).map_err(|e| ForgeError::History {
                code: ErrorCode::HistoryReadFailed,
                message: format!("Could not read history file: {e}"),
                path: path.to_path_buf(),
            })?;

            serde_json::from_str(&content).map_err(|e| ForgeError::History {
                code: ErrorCode::HistoryCorrupt,
                message: format!("Could not parse history file: {e}"),
                path: path.to_path_buf(),
            })?
        } else {
            Vec::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.records).map_err(|e| {
            ForgeError::History {
                code: ErrorCode::HistoryWriteFailed,
                message: format!("Could not serialize history: {e}"),
                path: self.path.clone(),
            }
        })?;

        fs::write(&self.path, content).map_err(|e| ForgeError::History {
            code: ErrorCode::HistoryWriteFailed,
            message: format!("Could not write history file: {e}"),
            path: self.path.clone(),
        })
    }
}

impl HistoryStore for JsonHistory {
    fn add(&mut self, record: OptimizationRecord) -> Result<()> {
        self.records.insert(0, record);
        self.records.truncate(MAX_HISTORY_ITEMS);
        self.save()
    }

    fn list(&self) -> Result<Vec<OptimizationRecord>> {
        Ok(self.records.clone())
    }

    fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;
    use crate::flows::{
        MetricScore, OptimizationDetails, PerformanceMetrics, PromptAnalysis,
    };

    fn sample_record(original: &str, optimized: &str) -> OptimizationRecord {
        let score = |n| MetricScore { score: n, explanation: String::new() };
        OptimizationRecord::new(
            OptimizeRequest::new(original),
            OptimizeOutcome {
                optimized_prompt: optimized.to_string(),
                details: OptimizationDetails {
                    confidence_score: 90,
                    original_prompt_analysis: PromptAnalysis::default(),
                    performance_metrics: PerformanceMetrics {
                        clarity: score(8),
                        specificity: score(7),
                        engagement: score(9),
                    },
                    suggestions: vec![],
                    general_tips: vec![],
                },
            },
            "Tightened the wording.".to_string(),
            compute_diff(original, optimized),
        )
    }

    #[test]
    fn list_is_newest_first() {
        let mut store = MemoryHistory::new();
        store.add(sample_record("first", "first!")).unwrap();
        store.add(sample_record("second", "second!")).unwrap();

        let records = store.list().unwrap();
        assert_eq!(records[0].input.original_prompt, "second");
        assert_eq!(records[1].input.original_prompt, "first");
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let mut store = MemoryHistory::new();
        for i in 0..MAX_HISTORY_ITEMS + 5 {
            store.add(sample_record(&format!("prompt {i}"), "rewritten")).unwrap();
        }

        let records = store.list().unwrap();
        assert_eq!(records.len(), MAX_HISTORY_ITEMS);
        assert_eq!(
            records.last().unwrap().input.original_prompt,
            "prompt 5",
            "the five oldest records must have been evicted"
        );
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = MemoryHistory::new();
        store.add(sample_record("a", "b")).unwrap();
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn json_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        {
            let mut store = JsonHistory::load(&path).unwrap();
            store.add(sample_record("draft", "polished draft")).unwrap();
        }

        let reloaded = JsonHistory::load(&path).unwrap();
        let records = reloaded.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].input.original_prompt, "draft");
        assert_eq!(records[0].diff.reconstruct_optimized(), "polished draft");
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonHistory::load(&dir.path().join("absent.json")).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_reported_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json {").unwrap();

        let err = JsonHistory::load(&path).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::HistoryCorrupt);
    }
}
