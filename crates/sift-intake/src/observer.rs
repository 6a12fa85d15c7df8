//! Status observers notified after every record change

use crate::IntakeError;
use sift_domain::FileRecord;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Receives a snapshot of every record after each change
///
/// Implemented for any `Fn(&[FileRecord])` closure.
pub trait StatusObserver: Send + Sync {
    /// Called with the full record list, in intake order
    fn on_update(&self, records: &[FileRecord]);
}

impl<F> StatusObserver for F
where
    F: Fn(&[FileRecord]) + Send + Sync,
{
    fn on_update(&self, records: &[FileRecord]) {
        self(records)
    }
}

/// Forwards snapshots over an unbounded tokio channel
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: UnboundedSender<Vec<FileRecord>>,
}

impl ChannelObserver {
    /// Create an observer and the receiving end of its channel
    pub fn new() -> (Self, UnboundedReceiver<Vec<FileRecord>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Wrap an existing sender
    pub fn from_sender(sender: UnboundedSender<Vec<FileRecord>>) -> Self {
        Self { sender }
    }

    /// Send one snapshot
    pub fn send(&self, records: &[FileRecord]) -> Result<(), IntakeError> {
        self.sender
            .send(records.to_vec())
            .map_err(|_| IntakeError::Observer("receiver dropped".to_string()))
    }
}

impl StatusObserver for ChannelObserver {
    fn on_update(&self, records: &[FileRecord]) {
        // A dropped receiver only means nobody is listening anymore
        if let Err(e) = self.send(records) {
            debug!("Skipping status update: {}", e);
        }
    }
}

/// Keeps every snapshot in memory
///
/// Clones share the same storage, so one clone can be registered with the
/// processor and another read afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    snapshots: Arc<Mutex<Vec<Vec<FileRecord>>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl RecordingObserver {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All snapshots received so far, oldest first
    pub fn snapshots(&self) -> Vec<Vec<FileRecord>> {
        lock(&self.snapshots).clone()
    }

    /// Most recent snapshot
    pub fn last(&self) -> Option<Vec<FileRecord>> {
        lock(&self.snapshots).last().cloned()
    }

    /// Number of snapshots received
    pub fn len(&self) -> usize {
        lock(&self.snapshots).len()
    }

    /// Whether no snapshot has been received
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StatusObserver for RecordingObserver {
    fn on_update(&self, records: &[FileRecord]) {
        lock(&self.snapshots).push(records.to_vec());
    }
}
