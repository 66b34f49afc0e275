//! # Repository Seam
//!
//! The store is an external collaborator behind a single-capability trait:
//! it can list everything, year ascending. No create/update/delete is part
//! of the read path's contract.

use thiserror::Error;

use super::entity::Emission;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a record store
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Interior lock was poisoned by a panicking writer
    #[error("store lock poisoned")]
    LockPoisoned,

    /// Seed file could not be read
    #[error("failed to read seed file: {0}")]
    SeedIo(String),

    /// Seed file was not a JSON array of records
    #[error("invalid seed file: {0}")]
    SeedFormat(String),
}

/// Read access to the emission record store.
pub trait EmissionRepository: Send + Sync {
    /// Return every record, ordered by year ascending.
    ///
    /// Ties on year keep insertion order.
    fn list_all(&self) -> StoreResult<Vec<Emission>>;
}
