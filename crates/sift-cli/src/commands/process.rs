//! Process command implementation.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::files::load_file;
use crate::output::{Formatter, ProgressPrinter};
use crate::config::OutputFormat;
use sift_domain::{FileRecord, FileStatus};
use sift_extractor::build_extractor;
use sift_gatekeeper::Gatekeeper;
use sift_intake::BatchProcessor;
use std::path::PathBuf;
use tracing::{info, warn};

/// Exit code when every file ended in `Error`.
pub const EXIT_ALL_FAILED: i32 = 2;

/// Inputs for one batch run.
#[derive(Debug, Clone)]
pub struct ProcessArgs {
    /// Files to process, in order
    pub files: Vec<PathBuf>,
}

/// Execute a batch run and return the process exit code.
pub async fn execute_process(
    args: ProcessArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<i32> {
    if args.files.is_empty() {
        return Err(CliError::InvalidInput(
            "no files given (try `sift --help`)".to_string(),
        ));
    }

    let raw_files = args
        .files
        .iter()
        .map(|path| load_file(path))
        .collect::<Result<Vec<_>>>()?;

    let gatekeeper = Gatekeeper::new(config.validation.to_validation_config());
    let extractor = build_extractor(&config.extractor)?;
    let mut processor =
        BatchProcessor::new(extractor, gatekeeper, config.processor.clone())?;

    if formatter.format() == OutputFormat::Table {
        processor.add_observer(ProgressPrinter::new(*formatter));
    }

    let stop = processor.stop_handle();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current file");
            stop.stop();
        }
    });

    processor.intake(raw_files);
    let metrics = processor.run_sequentially().await.clone();
    ctrl_c.abort();

    let records = processor.records();
    println!("{}", formatter.format_records(records)?);

    if processor.pending() > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} files were not processed", processor.pending()))
        );
    }
    info!(
        "{} completed, {} failed, {} rejected",
        metrics.completed, metrics.failed, metrics.rejected
    );

    Ok(exit_code(records))
}

/// 0 unless every file ended in `Error`.
pub fn exit_code(records: &[FileRecord]) -> i32 {
    if !records.is_empty() && records.iter().all(|r| r.status == FileStatus::Error) {
        EXIT_ALL_FAILED
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_domain::{FileDescriptor, FileId};
    use std::fs;
    use tempfile::TempDir;

    fn record(status_error: bool) -> FileRecord {
        let mut r = FileRecord::new(
            FileId::new(),
            FileDescriptor {
                name: "f".to_string(),
                size_bytes: 1,
                mime_type: "text/plain".to_string(),
                last_modified_ms: 0,
            },
        );
        if status_error {
            r.fail("Invalid file type").unwrap();
        }
        r
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&[]), 0);
        assert_eq!(exit_code(&[record(true), record(false)]), 0);
        assert_eq!(exit_code(&[record(true), record(true)]), EXIT_ALL_FAILED);
    }

    fn quiet_instant_config() -> Config {
        let mut config = Config::default();
        config.processor.tick_interval_ms = 0;
        config
    }

    #[tokio::test]
    async fn test_process_files_from_disk() {
        let dir = TempDir::new().unwrap();
        let csv = dir.path().join("people.csv");
        let png = dir.path().join("photo.png");
        fs::write(&csv, "name,age\nalice,30\n").unwrap();
        fs::write(&png, [0u8; 8]).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let code = execute_process(
            ProcessArgs { files: vec![csv, png] },
            &quiet_instant_config(),
            &formatter,
        )
        .await
        .unwrap();

        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_all_rejected_exit_code() {
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("photo.png");
        fs::write(&png, [0u8; 8]).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let code = execute_process(
            ProcessArgs { files: vec![png] },
            &quiet_instant_config(),
            &formatter,
        )
        .await
        .unwrap();

        assert_eq!(code, EXIT_ALL_FAILED);
    }

    #[tokio::test]
    async fn test_no_files_is_an_error() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let result = execute_process(
            ProcessArgs { files: Vec::new() },
            &Config::default(),
            &formatter,
        )
        .await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
