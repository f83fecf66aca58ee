//! Data directory layout.
//!
//! Defaults match the game's repository layout (`data/` and `data/assets/`),
//! so both tools run without arguments from the repository root. A RON file
//! can override either directory.

use std::path::{Path, PathBuf};

use gamedata_core::document::DocumentKind;
use gamedata_core::error::{DataError, Result};
use serde::{Deserialize, Serialize};

/// Where the documents and assets live.
///
/// # Example RON
///
/// ```ron
/// DataLayout(
///     data_dir: "data",
///     asset_dir: Some("data/assets"),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLayout {
    /// Directory containing `weapons.json`, `items.json`, etc.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Asset root. Defaults to `<data_dir>/assets`.
    #[serde(default)]
    pub asset_dir: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for DataLayout {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            asset_dir: None,
        }
    }
}

impl DataLayout {
    /// Layout rooted at `data_dir` with the default asset root.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            asset_dir: None,
        }
    }

    /// Load a layout from a RON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let path_str = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| DataError::ConfigRead {
            path: path_str.clone(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| DataError::ConfigParse {
            path: path_str,
            source,
        })
    }

    /// File path of a document.
    #[must_use]
    pub fn document_path(&self, kind: DocumentKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    /// Document path as shown in defect locations.
    #[must_use]
    pub fn display_path(&self, kind: DocumentKind) -> String {
        self.document_path(kind).display().to_string()
    }

    /// Resolved asset root.
    #[must_use]
    pub fn asset_root(&self) -> PathBuf {
        self.asset_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("assets"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = DataLayout::default();
        assert_eq!(layout.display_path(DocumentKind::Weapons), "data/weapons.json");
        assert_eq!(layout.asset_root(), PathBuf::from("data/assets"));
    }

    #[test]
    fn test_parse_from_ron() {
        let layout: DataLayout =
            ron::from_str(r#"DataLayout(data_dir: "content", asset_dir: Some("art"))"#).unwrap();
        assert_eq!(layout.document_path(DocumentKind::Items), PathBuf::from("content/items.json"));
        assert_eq!(layout.asset_root(), PathBuf::from("art"));
    }

    #[test]
    fn test_ron_asset_dir_defaults() {
        let layout: DataLayout = ron::from_str(r#"DataLayout(data_dir: "data")"#).unwrap();
        assert_eq!(layout, DataLayout::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = DataLayout::load(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(matches!(err, DataError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.ron");
        std::fs::write(&path, "DataLayout(data_dir: 5)").unwrap();
        let err = DataLayout::load(&path).unwrap_err();
        assert!(matches!(err, DataError::ConfigParse { .. }));
    }
}
