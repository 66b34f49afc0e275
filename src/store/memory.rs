//! # In-Memory Store
//!
//! Records live in a `RwLock<Vec<_>>`; ids are assigned sequentially from 1
//! on insert and never reused within a store's lifetime. The read path
//! returns a year-ascending copy.

use std::fs;
use std::path::Path;
use std::sync::RwLock;

use crate::domain::{Emission, EmissionRepository, NewEmission, StoreError, StoreResult};

/// In-memory emission record store
pub struct MemoryStore {
    records: RwLock<Vec<Emission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a store populated from a slice of unsaved records
    pub fn with_records(rows: Vec<NewEmission>) -> Self {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| row.with_id(i as i64 + 1))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Create a store from a JSON seed file (array of unsaved records)
    pub fn from_seed_file(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::SeedIo(e.to_string()))?;

        let rows: Vec<NewEmission> =
            serde_json::from_str(&content).map_err(|e| StoreError::SeedFormat(e.to_string()))?;

        Ok(Self::with_records(rows))
    }

    /// Insert a record, assigning the next sequential id
    pub fn insert(&self, row: NewEmission) -> StoreResult<Emission> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = records.len() as i64 + 1;
        let record = row.with_id(id);
        records.push(record.clone());
        Ok(record)
    }

    /// Number of records currently held
    pub fn len(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmissionRepository for MemoryStore {
    fn list_all(&self) -> StoreResult<Vec<Emission>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;

        let mut result = records.clone();
        // Stable sort: equal years keep insertion order
        result.sort_by_key(|r| r.year);
        Ok(result)
    }
}
