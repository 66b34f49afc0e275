//! # Seed Data Generation
//!
//! Random emission records for development and demos. Value pools match the
//! datasets this service is normally populated with.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::NewEmission;

const ACTIVITIES: &[&str] = &["Air travel", "Waste", "Transport", "Agriculture"];
const COUNTRIES: &[&str] = &["United Kingdom", "Canada", "USA"];
const EMISSION_TYPES: &[&str] = &["CO2", "N2O", "CH4"];
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1970..=2025;

/// Generate `count` random records from the seed pools.
pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<NewEmission> {
    (0..count)
        .map(|_| NewEmission {
            year: rng.gen_range(YEAR_RANGE),
            emissions: round2(rng.gen_range(1.0..300.0)),
            emission_type: pick(EMISSION_TYPES, rng),
            country: pick(COUNTRIES, rng),
            activity: pick(ACTIVITIES, rng),
        })
        .collect()
}

fn pick<R: Rng>(pool: &[&str], rng: &mut R) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
