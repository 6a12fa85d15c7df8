//! Turning paths on disk into raw files.

use crate::error::{CliError, Result};
use sift_domain::RawFile;
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Guess a MIME type from a file name's extension.
///
/// Unknown extensions map to `application/octet-stream`, which no allow-list
/// accepts.
pub fn guess_mime_type(filename: &str) -> String {
    let ext = match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    };
    match ext.as_str() {
        "txt" | "text" | "log" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// Read a file from disk into a [`RawFile`].
pub fn load_file(path: &Path) -> Result<RawFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidInput(format!("not a file: {}", path.display())))?;

    let metadata = fs::metadata(path)
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", path.display(), e)))?;
    if !metadata.is_file() {
        return Err(CliError::InvalidInput(format!("not a file: {}", path.display())));
    }

    let last_modified_ms = metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let bytes = fs::read(path)?;
    let mime_type = guess_mime_type(&name);
    Ok(RawFile::new(name, mime_type, last_modified_ms, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type("report.PDF"), "application/pdf");
        assert_eq!(guess_mime_type("data.csv"), "text/csv");
        assert_eq!(guess_mime_type("notes.txt"), "text/plain");
        assert_eq!(guess_mime_type("deck.pptx"),
            "application/vnd.openxmlformats-officedocument.presentationml.presentation");
        assert_eq!(guess_mime_type("archive.tar.gz"), "application/gzip");
        assert_eq!(guess_mime_type("Makefile"), "application/octet-stream");
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        fs::write(&path, "name\nalice\n").unwrap();

        let file = load_file(&path).unwrap();
        assert_eq!(file.name(), "people.csv");
        assert_eq!(file.mime_type(), "text/csv");
        assert_eq!(file.descriptor.size_bytes, 11);
        assert_eq!(file.bytes, b"name\nalice\n");
        assert!(file.descriptor.last_modified_ms > 0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_file(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_load_directory() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_file(dir.path()),
            Err(CliError::InvalidInput(_))
        ));
    }
}
