//! Metrics collection for batch runs

use std::time::Duration;

/// Counts and timings collected while processing batches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchMetrics {
    /// Files that reached `Completed`
    pub completed: usize,

    /// Accepted files whose extraction failed or timed out
    pub failed: usize,

    /// Files rejected by validation
    pub rejected: usize,

    /// Wall-clock time spent inside the extractor
    pub total_extraction: Duration,

    /// Batch runs finished
    pub run_count: usize,
}

impl BatchMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful extraction
    pub fn record_completed(&mut self, elapsed: Duration) {
        self.completed += 1;
        self.total_extraction += elapsed;
    }

    /// Record a failed extraction
    pub fn record_failed(&mut self, elapsed: Duration) {
        self.failed += 1;
        self.total_extraction += elapsed;
    }

    /// Record a validation rejection
    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    /// Record the end of a run
    pub fn record_run(&mut self) {
        self.run_count += 1;
    }

    /// Every file that reached a terminal status
    pub fn total_files(&self) -> usize {
        self.completed + self.failed + self.rejected
    }

    /// Files that ended in `Error`, for any reason
    pub fn total_errors(&self) -> usize {
        self.failed + self.rejected
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        [
            "Batch Metrics Summary".to_string(),
            "=====================".to_string(),
            format!("Runs: {}", self.run_count),
            format!("Completed: {}", self.completed),
            format!("Failed: {}", self.failed),
            format!("Rejected: {}", self.rejected),
            format!("Extraction time: {}ms", self.total_extraction.as_millis()),
        ]
        .join("\n")
    }
}
