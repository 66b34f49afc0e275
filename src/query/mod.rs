//! # Listing Query Module
//!
//! Filter model and the listing use case. Filterable fields are an explicit
//! enumerated set with one typed equality comparator each; nothing
//! open-ended reaches the store.

mod filter;
mod list;

pub use filter::{FilterClause, FilterError, FilterField, FilterSet};
pub use list::ListEmissions;
