use std::path::PathBuf;

use super::{KeyValueSlot, StorageError};

/// Slot adapter that stores each key as a JSON file under a base directory.
pub struct FileSlot {
    base_dir: PathBuf,
}

impl FileSlot {
    /// Create a new adapter rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl Default for FileSlot {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

impl KeyValueSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| StorageError::Io(e.to_string()))?;
        std::fs::write(self.slot_path(key), value).map_err(|e| StorageError::Io(e.to_string()))
    }
}
