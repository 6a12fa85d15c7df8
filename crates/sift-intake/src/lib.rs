//! Sift Intake
//!
//! Sequential batch processing of user-supplied files.
//!
//! # Overview
//!
//! The [`BatchProcessor`] owns the record list of a session. Every intaked
//! file walks this state machine, one file at a time and in intake order:
//!
//! ```text
//! Idle --intake--> Uploading --ticks 0,10,..,100--> Processing --ok--> Completed
//! Idle --validation rejects--> Error
//! Uploading/Processing --extractor error or timeout--> Error
//! ```
//!
//! A failure is recorded on that file's record and the batch moves on.
//!
//! # Usage
//!
//! ```
//! use sift_domain::RawFile;
//! use sift_extractor::LocalExtractor;
//! use sift_gatekeeper::Gatekeeper;
//! use sift_intake::{BatchProcessor, ChannelObserver, ProcessorConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut processor = BatchProcessor::new(
//!     LocalExtractor::new(),
//!     Gatekeeper::default_config(),
//!     ProcessorConfig::instant(),
//! )?;
//!
//! let (observer, mut updates) = ChannelObserver::new();
//! processor.add_observer(observer);
//!
//! processor.intake(vec![RawFile::new("notes.txt", "text/plain", 0, b"hello".to_vec())]);
//! processor.run_sequentially().await;
//!
//! while let Ok(snapshot) = updates.try_recv() {
//!     println!("{} -> {}", snapshot[0].name(), snapshot[0].status);
//! }
//! println!("{}", processor.metrics().summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [processor]
//! tick_interval_ms = 100
//! progress_step = 10
//! preview_chars = 200
//! file_timeout_secs = 120
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod observer;
mod preview;
mod processor;

pub use config::ProcessorConfig;
pub use error::IntakeError;
pub use metrics::BatchMetrics;
pub use observer::{ChannelObserver, RecordingObserver, StatusObserver};
pub use preview::{make_preview, ELLIPSIS};
pub use processor::{BatchProcessor, StopHandle, UNKNOWN_ERROR};
