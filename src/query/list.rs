//! # Listing Use Case
//!
//! One read per request: pull the store's year-ordered records and keep the
//! ones matching every filter clause. Store order is preserved, so results
//! stay year-ascending no matter which filters apply.

use std::sync::Arc;

use crate::domain::{Emission, EmissionRepository, StoreResult};

use super::filter::FilterSet;

/// Lists emission records with optional equality filtering.
pub struct ListEmissions {
    repo: Arc<dyn EmissionRepository>,
}

impl ListEmissions {
    pub fn new(repo: Arc<dyn EmissionRepository>) -> Self {
        Self { repo }
    }

    /// Return the records matching all clauses in `filters`.
    ///
    /// An empty filter set returns every record. Zero matches is a normal
    /// outcome: an empty vec, not an error.
    pub fn execute(&self, filters: &FilterSet) -> StoreResult<Vec<Emission>> {
        let records = self.repo.list_all()?;
        if filters.is_empty() {
            return Ok(records);
        }
        Ok(records.into_iter().filter(|r| filters.matches(r)).collect())
    }
}
