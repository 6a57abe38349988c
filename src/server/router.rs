//! Axum router configuration
//!
//! ```text
//! /api
//! ├── /health    - liveness
//! ├── /pois      - filtered, paginated venue listing
//! ├── /summary   - count and foot-traffic total for a filter
//! └── /options   - distinct values for filter controls
//! ```
//!
//! Anything else falls through to a JSON 404.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

use crate::config::NetworkConfig;
use crate::handlers::{filter_options, health, list_venues, not_found, venue_summary};
use crate::state::AppState;

/// Build the complete Axum router with all routes
pub fn build_router(state: AppState, network: &NetworkConfig) -> Router {
    let router = Router::new().nest("/api", api_router(state)).fallback(not_found);

    if network.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Read-only venue API routes
fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/pois", get(list_venues))
        .route("/summary", get(venue_summary))
        .route("/options", get(filter_options))
        .with_state(state)
}
