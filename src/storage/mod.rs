//! Adapters for the persistent key-value slot and the ledger store built on
//! top of them.

mod file;
mod store;

use std::collections::HashMap;

pub use file::FileSlot;
pub use store::{LedgerStore, SLOT_KEY};

/// Represents errors that can occur when interacting with the key-value
/// slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    Io(String),
    /// The sequence could not be serialized for writing.
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage io error: {e}"),
            StorageError::Serialize(e) => write!(f, "serialization error: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Abstraction over a persistent key-value slot.
///
/// One named slot holds the serialized transaction sequence as an opaque
/// blob; it is read at startup and overwritten wholesale after every
/// mutation. No partial or delta updates exist.
pub trait KeyValueSlot {
    /// Reads the blob stored under `key`, `None` if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Overwrites the blob stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory slot used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_roundtrip() {
        let mut slot = MemorySlot::new();
        assert_eq!(slot.get("ledger").unwrap(), None);
        slot.set("ledger", "[]").unwrap();
        assert_eq!(slot.get("ledger").unwrap().as_deref(), Some("[]"));
        slot.set("ledger", "[1]").unwrap();
        assert_eq!(slot.get("ledger").unwrap().as_deref(), Some("[1]"));
    }
}
