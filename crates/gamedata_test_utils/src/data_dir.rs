//! Temporary data directories laid out like the game's `data/` folder.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A throwaway `data/` tree with JSON documents and asset files.
///
/// The directory is removed when this value is dropped.
pub struct TestDataDir {
    root: TempDir,
}

impl TestDataDir {
    /// Create an empty data directory with an empty `assets/` subtree.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp data dir");
        fs::create_dir_all(root.path().join("assets")).expect("create assets dir");
        Self { root }
    }

    /// Create a data directory where every document is present and empty.
    #[must_use]
    pub fn with_empty_documents() -> Self {
        let dir = Self::new();
        for key in ["weapons", "items", "enemies", "characters"] {
            dir.write_document(key, Vec::new());
        }
        dir
    }

    /// Path of the data directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path of the asset root.
    #[must_use]
    pub fn assets(&self) -> PathBuf {
        self.root.path().join("assets")
    }

    /// Write `<list_key>.json` as `{"<list_key>": records}`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_document(&self, list_key: &str, records: Vec<Value>) {
        let doc = crate::fixtures::document(list_key, records);
        self.write_raw(&format!("{list_key}.json"), &doc.to_string());
    }

    /// Write arbitrary text to a file in the data directory.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, file_name: &str, contents: &str) {
        fs::write(self.root.path().join(file_name), contents).expect("write data file");
    }

    /// Create an empty asset file at `rel_path` under the asset root.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be created.
    pub fn touch_asset(&self, rel_path: &str) {
        let path = self.assets().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create asset parent dir");
        }
        fs::write(path, b"").expect("write asset file");
    }
}

impl Default for TestDataDir {
    fn default() -> Self {
        Self::new()
    }
}
