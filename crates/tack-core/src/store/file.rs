//! File-backed key-value store
//!
//! Stores each key as a JSON file under the data directory
//! (`<data_dir>/<key>.json`). Uses atomic writes (write to temp file,
//! then rename) to prevent corruption from interrupted writes.
//!
//! Storage location: `~/.local/share/tack/` (configurable via `Config`)

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::store::{KeyValueStore, StoreError, StoreResult};

/// Key-value store backed by JSON files on the local filesystem
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the configured data directory
    pub fn new(config: &Config) -> Self {
        Self::with_dir(config.data_dir.clone())
    }

    /// Create a store rooted at an explicit directory
    pub fn with_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn read_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        let payload =
            fs::read_to_string(&path).map_err(|e| StoreError::ReadError { path, source: e })?;

        Ok(Some(payload))
    }

    fn write_raw(&mut self, key: &str, payload: &str) -> StoreResult<()> {
        atomic_write(&self.path_for(key), payload.as_bytes())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)
        .map_err(|e| StoreError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StoreError::from_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StoreError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|e| StoreError::from_io(e, path.to_path_buf()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Note, NoteColor};
    use tempfile::TempDir;

    fn sample_note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            title: "Title".to_string(),
            content: "Content".to_string(),
            created_at: 100,
            updated_at: 200,
            color: NoteColor::Red,
        }
    }

    #[test]
    fn test_read_missing_key_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::with_dir(temp_dir.path().to_path_buf());

        assert!(store.read_raw("notes").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::with_dir(temp_dir.path().to_path_buf());

        let notes = vec![sample_note("a"), sample_note("b")];
        store.write("notes", &notes).unwrap();

        let loaded: Vec<Note> = store.read("notes", Vec::new());
        assert_eq!(loaded, notes);
    }

    #[test]
    fn test_read_survives_process_restart() {
        let temp_dir = TempDir::new().unwrap();
        let notes = vec![sample_note("a")];

        {
            let mut store = FileStore::with_dir(temp_dir.path().to_path_buf());
            store.write("notes", &notes).unwrap();
        }

        // A fresh store over the same directory sees the data
        let store = FileStore::with_dir(temp_dir.path().to_path_buf());
        let loaded: Vec<Note> = store.read("notes", Vec::new());
        assert_eq!(loaded, notes);
    }

    #[test]
    fn test_corrupt_file_reads_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::with_dir(temp_dir.path().to_path_buf());

        fs::write(store.path_for("notes"), "{definitely not json").unwrap();

        let loaded: Vec<Note> = store.read("notes", Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_write_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let mut store = FileStore::with_dir(nested.clone());

        store.write("notes", &vec![sample_note("a")]).unwrap();
        assert!(nested.join("notes.json").exists());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::with_dir(temp_dir.path().to_path_buf());

        store.write("notes", &Vec::<Note>::new()).unwrap();
        assert!(!store.path_for("notes").with_extension("tmp").exists());
    }
}
