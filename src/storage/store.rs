use chrono::Utc;
use tracing::{debug, info};

use super::{KeyValueSlot, StorageError};
use crate::core::{Transaction, TransactionDraft};

/// Name of the slot holding the serialized ledger.
pub const SLOT_KEY: &str = "finance_tracker";

/// Owns the canonical ordered transaction sequence and mirrors it to a
/// key-value slot as a JSON blob.
///
/// Every mutation persists immediately; readers only ever observe a blob
/// that matches the in-memory sequence at the last save.
pub struct LedgerStore<S: KeyValueSlot> {
    slot: S,
    key: String,
    transactions: Vec<Transaction>,
    last_id: u64,
}

impl<S: KeyValueSlot> LedgerStore<S> {
    /// Creates an empty store over `slot` without touching the medium.
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            key: SLOT_KEY.to_string(),
            transactions: Vec::new(),
            last_id: 0,
        }
    }

    /// Creates a store and loads whatever the slot currently holds.
    pub fn open(slot: S) -> Result<Self, StorageError> {
        let mut store = Self::new(slot);
        store.load()?;
        Ok(store)
    }

    /// Reloads the sequence from the slot. A missing blob or one that fails
    /// to deserialize is treated as "no prior data", never as a fatal error.
    pub fn load(&mut self) -> Result<(), StorageError> {
        self.transactions = match self.slot.get(&self.key)? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(transactions) => transactions,
                Err(err) => {
                    debug!(%err, "discarding unreadable ledger blob");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        self.last_id = self.transactions.iter().map(|t| t.id).max().unwrap_or(0);
        Ok(())
    }

    /// Serializes the current sequence and overwrites the slot wholesale.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&self.transactions)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.slot.set(&self.key, &blob)
    }

    /// Appends a drafted transaction with a fresh id and persists. Returns
    /// the assigned id.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<u64, StorageError> {
        let id = self.next_id();
        info!(id, kind = %draft.kind(), category = draft.category(), "recording transaction");
        self.transactions.push(draft.into_transaction(id));
        self.save()?;
        Ok(id)
    }

    /// Removes the transaction with the given id and persists. A no-op
    /// (apart from the save) when the id is not present.
    pub fn remove(&mut self, id: u64) -> Result<(), StorageError> {
        self.transactions.retain(|t| t.id != id);
        self.save()
    }

    /// The in-memory sequence, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    // Wall-clock milliseconds, bumped past the previous id so ids stay
    // unique within a single millisecond.
    fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}
