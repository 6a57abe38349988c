//! Response shapes shared by the server and the client.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// One venue as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub entity_id: String,
    pub name: String,
    pub chain_name: Option<String>,
    pub category: Option<String>,
    pub dma: Option<i64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub visits: i64,
    pub is_open: bool,
}

impl VenueRecord {
    /// Map a row selected with [`VIEW_COLUMNS`](crate::store::schema::VIEW_COLUMNS).
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            entity_id: row.get(0)?,
            name: row.get(1)?,
            chain_name: row.get(2)?,
            category: row.get(3)?,
            dma: row.get(4)?,
            city: row.get(5)?,
            state: row.get(6)?,
            visits: row.get(7)?,
            is_open: row.get::<_, i64>(8)? != 0,
        })
    }
}

/// `GET /api/pois` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenuePage {
    pub items: Vec<VenueRecord>,
    pub page: u64,
    pub page_size: u32,
    pub total_count: u64,
}

/// `GET /api/summary` response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub total_venues: u64,
    pub total_foot_traffic: i64,
}

/// `GET /api/options` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub chain_names: Vec<String>,
    pub dmas: Vec<i64>,
    pub categories: Vec<String>,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
}
