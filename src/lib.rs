//! bigbox: a read-only analytics API over big-box retail venue records.
//!
//! ```text
//! CSV snapshot ──build-db──▶ bigbox.sqlite (venues + venues_view)
//!                                  │
//!                           RecordStore (read-only, opened once)
//!                                  │
//!  query string ─▶ validate ─▶ builder ─▶ domain ─▶ JSON
//!                                  │
//!                 /api/pois  /api/summary  /api/options  /api/health
//! ```
//!
//! The `client` module is the consuming side: typed fetch wrappers, the
//! keyword search table and the terminal rendering used by `bigbox-query`.

pub mod client;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod ingest;
pub mod logging;
pub mod query;
pub mod server;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::ApiError;
pub use state::AppState;
pub use store::{RecordStore, StoreError, StoreHandle};
