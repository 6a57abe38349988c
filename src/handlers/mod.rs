//! HTTP handlers organized by feature
//!
//! - `venues` - listing, summary and filter options
//! - `health` - liveness and the JSON 404 fallback

pub mod health;
pub mod venues;

pub use health::{health, not_found};
pub use venues::{filter_options, list_venues, venue_summary};
