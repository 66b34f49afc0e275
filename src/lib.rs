//! emissions-api - read-only HTTP service listing emission records
//!
//! Layers, leaves first: `domain` (entity + repository trait), `store`
//! (in-memory implementation + seeding), `query` (filter model + listing
//! use case), `http_server` (axum surface), `cli` (serve/seed commands).

pub mod cli;
pub mod domain;
pub mod http_server;
pub mod query;
pub mod store;
