//! Venue API handlers
//!
//! Each handler validates the raw query string, runs the read on the
//! blocking pool, and returns JSON. Errors convert through [`ApiError`].

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};

use crate::domain::{self, FilterOptions, VenuePage, VenueSummary};
use crate::error::ApiError;
use crate::query::{ListRequest, VenueFilter};
use crate::state::AppState;

/// `GET /api/pois` - filtered, sorted, paginated venue listing
pub async fn list_venues(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<VenuePage>, ApiError> {
    let request = ListRequest::from_params(&params)?;
    tracing::debug!(?request, "list venues");

    let page = state.store().read(move |store| domain::list_venues(store, &request)).await?;
    Ok(Json(page))
}

/// `GET /api/summary` - venue count and total foot traffic for a filter
///
/// Page and sort parameters are accepted and ignored.
pub async fn venue_summary(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<VenueSummary>, ApiError> {
    let filter = VenueFilter::from_params(&params)?;
    tracing::debug!(?filter, unfiltered = filter.is_unfiltered(), "venue summary");

    let summary = state.store().read(move |store| domain::summarize(store, &filter)).await?;
    Ok(Json(summary))
}

/// `GET /api/options` - distinct chain names, DMA codes and categories
pub async fn filter_options(State(state): State<AppState>) -> Result<Json<FilterOptions>, ApiError> {
    let options = state.store().read(domain::filter_options).await?;
    Ok(Json(options))
}
