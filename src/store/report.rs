//! Database health report used by `check-db`.

use serde::Serialize;

use super::schema::VIEW_COLUMNS;
use super::{BoundQuery, RecordStore, StoreError};
use crate::domain::VenueRecord;

/// Rows per chain, with `None` for independent venues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainCount {
    pub chain_name: Option<String>,
    pub venues: u64,
}

/// Snapshot of what the database holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseReport {
    pub venue_count: u64,
    pub open_count: u64,
    /// Distinct chain groups, counting independents as one group.
    pub distinct_chains: u64,
    pub top_chains: Vec<ChainCount>,
    pub sample: Vec<VenueRecord>,
}

impl DatabaseReport {
    /// A database is healthy when it holds venues and they can be read back.
    pub fn is_healthy(&self) -> bool {
        self.venue_count > 0 && !self.sample.is_empty()
    }
}

const TOP_CHAINS: usize = 5;
const SAMPLE_ROWS: usize = 5;

impl RecordStore {
    /// Collect counts, the largest chains and a few sample rows.
    pub fn inspect(&self) -> Result<DatabaseReport, StoreError> {
        let count = |sql: &str| self.query_one(&BoundQuery::plain(sql), |row| row.get::<_, i64>(0));

        let venue_count = count("SELECT COUNT(*) FROM venues")?;
        let open_count = count("SELECT COUNT(*) FROM venues_view WHERE is_open = 1")?;

        let chains = self.query_rows(
            &BoundQuery::plain(
                "SELECT chain_name, COUNT(*) AS n FROM venues GROUP BY chain_name ORDER BY n DESC, chain_name ASC",
            ),
            |row| {
                Ok(ChainCount {
                    chain_name: row.get(0)?,
                    venues: row.get::<_, i64>(1)?.max(0) as u64,
                })
            },
        )?;

        let sample = self.query_rows(
            &BoundQuery::plain(format!("SELECT {VIEW_COLUMNS} FROM venues_view LIMIT {SAMPLE_ROWS}")),
            VenueRecord::from_row,
        )?;

        Ok(DatabaseReport {
            venue_count: venue_count.max(0) as u64,
            open_count: open_count.max(0) as u64,
            distinct_chains: chains.len() as u64,
            top_chains: chains.into_iter().take(TOP_CHAINS).collect(),
            sample,
        })
    }
}
