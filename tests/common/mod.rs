//! Common test infrastructure module
//!
//! Shared fixtures used across the integration tests. Not every test binary
//! uses every helper.

#![allow(dead_code, unused_imports)]

pub mod fixtures;

pub use fixtures::{FixtureVenue, INVALID_ROWS, TestServer, VALID_ROWS, VenueFixture, venues};
