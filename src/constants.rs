//! Fixed bounds and defaults for the venue API.
//!
//! Request-facing limits live here so the validator, the query builder and
//! the client all agree on the same numbers.

// ============================================================================
// Pagination
// ============================================================================

/// Page returned when the request does not name one.
pub const DEFAULT_PAGE: u32 = 1;

/// Rows per page when the list request does not specify `page_size`.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Largest accepted `page_size`.
///
/// Requests above this are rejected, not clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pages shown on either side of the current page in the pagination control.
pub const PAGE_WINDOW_RADIUS: u32 = 2;

// ============================================================================
// Storage
// ============================================================================

/// File name of the persisted venue database.
pub const DB_FILE_NAME: &str = "bigbox.sqlite";

/// Directories searched, in order, when no database path is configured.
pub const DB_SEARCH_DIRS: &[&str] = &["data", "../data", "../../data"];

/// Upper bound stored for a single venue's foot traffic.
///
/// Keeps `SUM(visits)` inside `i64` for any realistic venue count.
pub const MAX_FOOT_TRAFFIC: i64 = 1_000_000_000_000;

/// Read-only projection queried at runtime.
pub const VENUES_VIEW: &str = "venues_view";

// ============================================================================
// Server
// ============================================================================

/// Default HTTP port for the API server.
pub const DEFAULT_HTTP_PORT: u16 = 4000;

/// Default HTTP bind address.
pub const DEFAULT_HTTP_BIND_ADDR: &str = "0.0.0.0";
