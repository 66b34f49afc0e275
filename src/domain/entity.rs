//! # Emission Record
//!
//! The single entity this service serves. Records are created by seeding or
//! external insertion and are never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A persisted emission record.
///
/// `id` is store-assigned, unique and immutable. Serializes to exactly six
/// JSON fields: `id`, `year`, `emissions`, `emission_type`, `country`,
/// `activity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emission {
    pub id: i64,
    pub year: i32,
    pub emissions: f64,
    pub emission_type: String,
    pub country: String,
    pub activity: String,
}

impl fmt::Display for Emission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.country, self.year, self.emission_type)
    }
}

/// Input shape for a record that has not been assigned an id yet.
///
/// Seed files are JSON arrays of these; the store assigns ids on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmission {
    pub year: i32,
    pub emissions: f64,
    pub emission_type: String,
    pub country: String,
    pub activity: String,
}

impl NewEmission {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: i64) -> Emission {
        Emission {
            id,
            year: self.year,
            emissions: self.emissions,
            emission_type: self.emission_type,
            country: self.country,
            activity: self.activity,
        }
    }
}
