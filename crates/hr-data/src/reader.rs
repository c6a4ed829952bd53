//! Input loading for the daily summariser.
//!
//! Reads the JSON document holding the measurement records. Structural
//! validation is left to the aggregator.

use std::path::Path;

use hr_core::error::{Result, SummaryError};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read `path` and parse it as JSON.
///
/// I/O failures become [`SummaryError::FileRead`], invalid JSON becomes
/// [`SummaryError::JsonParse`]. No structural checks happen here.
pub fn read_document(path: &Path) -> Result<serde_json::Value> {
    let bytes = std::fs::read(path).map_err(|source| SummaryError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let document = serde_json::from_slice(&bytes)?;
    Ok(document)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    // ── read_document ─────────────────────────────────────────────────────────

    #[test]
    fn test_read_document_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_document(&dir.path().join("absent.json")).unwrap_err();
        match err {
            SummaryError::FileRead { path, .. } => {
                assert!(path.ends_with("absent.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_document_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write_input(dir.path(), "bad.json", "[{not valid json");
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, SummaryError::JsonParse(_)));
    }

    #[test]
    fn test_read_document_any_json() {
        let dir = TempDir::new().unwrap();
        let path = write_input(dir.path(), "obj.json", r#"{"a": 1}"#);
        let doc = read_document(&path).unwrap();
        assert_eq!(doc["a"], 1);
    }
}
