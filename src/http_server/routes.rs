//! # Routes
//!
//! The listing endpoint and the root liveness check.
//!
//! `GET /api/emissions/` recognizes the query parameters `country`,
//! `activity` and `emission_type`; anything else in the query string is
//! ignored. A key is forwarded only when present, so an absent parameter
//! never becomes a filter (an empty value filters for the empty string).

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::domain::{Emission, EmissionRepository};
use crate::query::{FilterClause, FilterSet, ListEmissions};

use super::errors::ApiResult;

/// Shared state for API routes
pub struct AppState {
    usecase: ListEmissions,
}

impl AppState {
    pub fn new(repo: Arc<dyn EmissionRepository>) -> Self {
        Self {
            usecase: ListEmissions::new(repo),
        }
    }
}

/// Routes mounted under `/api`
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/emissions/", get(list_emissions))
        .with_state(state)
}

/// Root-level routes
pub fn root_routes() -> Router {
    Router::new().route("/", get(home))
}

/// Liveness check
async fn home() -> &'static str {
    "Backend is running!"
}

/// List emission records, optionally filtered
async fn list_emissions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<Emission>>> {
    let filters = filters_from_params(&params);
    let records = state.usecase.execute(&filters)?;
    Ok(Json(records))
}

/// Build a filter set from the recognized query parameters.
///
/// Only the enumerated string fields are consulted, so clause construction
/// cannot fail here.
fn filters_from_params(params: &HashMap<String, String>) -> FilterSet {
    let mut filters = FilterSet::new();
    if let Some(value) = params.get("country") {
        filters = filters.and(FilterClause::Country(value.clone()));
    }
    if let Some(value) = params.get("activity") {
        filters = filters.and(FilterClause::Activity(value.clone()));
    }
    if let Some(value) = params.get("emission_type") {
        filters = filters.and(FilterClause::EmissionType(value.clone()));
    }
    filters
}
