//! Sequential batch processor

use crate::preview::make_preview;
use crate::{BatchMetrics, IntakeError, ProcessorConfig, StatusObserver};
use sift_domain::traits::Extractor;
use sift_domain::{FileId, FileRecord, RawFile};
use sift_gatekeeper::Gatekeeper;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

/// Message recorded when an extractor fails without saying why
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Requests that a running batch stop before its next file
///
/// The file being processed when `stop` is called still finishes; files not
/// yet started keep their `Idle` status and stay queued.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    /// Ask the processor to stop
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Whether a stop was requested
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    fn clear(&self) {
        self.stopped.store(false, Ordering::SeqCst);
    }
}

/// Drives every intaked file through validation, upload and extraction
///
/// Files are handled strictly one at a time, in intake order. Each status
/// change is pushed to every registered [`StatusObserver`] as a snapshot of
/// all records.
///
/// # Examples
///
/// ```
/// use sift_domain::{FileStatus, RawFile};
/// use sift_extractor::LocalExtractor;
/// use sift_gatekeeper::Gatekeeper;
/// use sift_intake::{BatchProcessor, ProcessorConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut processor = BatchProcessor::new(
///     LocalExtractor::new(),
///     Gatekeeper::default_config(),
///     ProcessorConfig::instant(),
/// )?;
///
/// let records = processor
///     .process_batch(vec![RawFile::new("a.txt", "text/plain", 0, b"a b c".to_vec())])
///     .await;
///
/// assert_eq!(records[0].status, FileStatus::Completed);
/// assert_eq!(records[0].preview_text.as_deref(), Some("a b c..."));
/// # Ok(())
/// # }
/// ```
pub struct BatchProcessor<E: Extractor> {
    extractor: E,
    gatekeeper: Gatekeeper,
    config: ProcessorConfig,
    records: Vec<FileRecord>,
    queue: VecDeque<(FileId, RawFile)>,
    observers: Vec<Box<dyn StatusObserver>>,
    metrics: BatchMetrics,
    stop: StopHandle,
}

impl<E: Extractor> BatchProcessor<E> {
    /// Create a processor, validating the configuration
    pub fn new(
        extractor: E,
        gatekeeper: Gatekeeper,
        config: ProcessorConfig,
    ) -> Result<Self, IntakeError> {
        config.validate()?;
        Ok(Self {
            extractor,
            gatekeeper,
            config,
            records: Vec::new(),
            queue: VecDeque::new(),
            observers: Vec::new(),
            metrics: BatchMetrics::new(),
            stop: StopHandle::default(),
        })
    }

    /// Register an observer for every subsequent change
    pub fn add_observer(&mut self, observer: impl StatusObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Handle for stopping a run between files
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// All records in intake order
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn record(&self, id: FileId) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Files intaked but not yet started
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Metrics accumulated across runs
    pub fn metrics(&self) -> &BatchMetrics {
        &self.metrics
    }

    /// Active configuration
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Add files to the batch
    ///
    /// Each file gets an `Idle` record appended after the existing ones and
    /// is queued for processing. Observers are notified once.
    pub fn intake(&mut self, files: Vec<RawFile>) -> Vec<FileId> {
        let mut ids = Vec::with_capacity(files.len());
        for file in files {
            let id = FileId::new();
            debug!("Intake {} as {}", file.name(), id);
            self.records
                .push(FileRecord::new(id, file.descriptor.clone()));
            self.queue.push_back((id, file));
            ids.push(id);
        }

        if !ids.is_empty() {
            self.notify();
        }
        ids
    }

    /// Process every queued file, one at a time
    ///
    /// Returns after the queue is empty or a stop was requested. A failing
    /// file never stops the loop.
    pub async fn run_sequentially(&mut self) -> &BatchMetrics {
        info!("Processing {} queued files", self.queue.len());

        while let Some((id, file)) = self.queue.pop_front() {
            if let Err(e) = self.process_file(id, &file).await {
                error!("Failed to track {}: {}", file.name(), e);
            }

            if self.stop.is_stopped() {
                info!("Stop requested, {} files left idle", self.queue.len());
                break;
            }
        }

        self.stop.clear();
        self.metrics.record_run();
        info!("Batch finished:\n{}", self.metrics.summary());
        &self.metrics
    }

    /// Intake `files`, run the queue and return the final records
    pub async fn process_batch(&mut self, files: Vec<RawFile>) -> Vec<FileRecord> {
        self.intake(files);
        self.run_sequentially().await;
        self.records.clone()
    }

    async fn process_file(&mut self, id: FileId, file: &RawFile) -> Result<(), IntakeError> {
        let validation = self.gatekeeper.validate(&file.descriptor);
        if let Some(reason) = validation.reason {
            info!("Rejected {}: {}", file.name(), reason);
            self.update(id, |r| r.fail(reason.to_string()))?;
            self.metrics.record_rejected();
            return Ok(());
        }

        self.update(id, FileRecord::begin_upload)?;
        let tick = self.config.tick_interval();
        for progress in self.config.progress_steps() {
            if !tick.is_zero() {
                sleep(tick).await;
            }
            self.update(id, |r| r.set_progress(progress))?;
        }

        self.update(id, FileRecord::begin_processing)?;
        debug!("Extracting {} with {}", file.name(), self.extractor.name());

        let started = Instant::now();
        let outcome = timeout(self.config.file_timeout(), self.extractor.extract(file)).await;
        let elapsed = started.elapsed();

        match outcome {
            Ok(Ok(result)) => {
                let preview = make_preview(&result.text, self.config.preview_chars);
                let summary = result.summary();
                info!(
                    "Completed {} ({} words, {}ms)",
                    file.name(),
                    summary.word_count,
                    elapsed.as_millis()
                );
                self.update(id, |r| r.complete(preview, summary))?;
                self.metrics.record_completed(elapsed);
            }
            Ok(Err(e)) => {
                let message = failure_message(&e.to_string());
                warn!("Extraction failed for {}: {}", file.name(), message);
                self.update(id, |r| r.fail(message))?;
                self.metrics.record_failed(elapsed);
            }
            Err(_) => {
                let message = format!(
                    "Processing timed out after {}s",
                    self.config.file_timeout_secs
                );
                warn!("{}: {}", file.name(), message);
                self.update(id, |r| r.fail(message))?;
                self.metrics.record_failed(elapsed);
            }
        }

        Ok(())
    }

    /// Apply a change to one record and notify observers
    fn update<F>(&mut self, id: FileId, change: F) -> Result<(), IntakeError>
    where
        F: FnOnce(&mut FileRecord) -> Result<(), sift_domain::InvalidTransition>,
    {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| IntakeError::Config(format!("no record for {}", id)))?;
        change(record)?;
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_update(&self.records);
        }
    }
}

fn failure_message(message: &str) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message.to_string()
    }
}
