//! Domain layer: the emission record and the repository seam.

mod entity;
mod repository;

pub use entity::{Emission, NewEmission};
pub use repository::{EmissionRepository, StoreError, StoreResult};
