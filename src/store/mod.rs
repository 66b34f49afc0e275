//! # Record Store
//!
//! In-memory implementation of the repository seam, plus seeding helpers for
//! populating it from generated data or a JSON file.

mod memory;
pub mod seed;

pub use memory::MemoryStore;
