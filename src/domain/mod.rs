//! Venue domain: response types and the read operations behind each endpoint.

pub mod types;
pub mod venues;

pub use types::{FilterOptions, Health, VenuePage, VenueRecord, VenueSummary};
pub use venues::{filter_options, list_venues, summarize};
