//! Document loading.

use std::path::Path;

use gamedata_core::error::Result;
use serde_json::Value;

/// Read and parse one JSON document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON. The
/// caller reports it as a single defect against the document and skips
/// that document's schema checks.
pub fn load_document(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path)?;
    let root = serde_json::from_str(&contents)?;
    tracing::debug!(path = %path.display(), "loaded document");
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamedata_core::error::DataError;

    #[test]
    fn test_load_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, r#"{"items": []}"#).unwrap();

        let root = load_document(&path).unwrap();
        assert!(root["items"].is_array());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weapons.json");
        std::fs::write(&path, r#"{"weapons": [}"#).unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
        assert!(err.to_string().contains("line 1"), "{err}");
    }
}
