//! Offline ingestion: CSV snapshot to SQLite venue database.
//!
//! The target database is rebuilt wholesale. Rows are written to a sibling
//! temporary file inside one transaction, which is renamed over the target
//! only after the commit succeeds, so a running server never sees a half
//! written file.

pub mod coerce;
mod row;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, Transaction, named_params};
use serde::Serialize;
use snafu::{ResultExt, Snafu};

pub use row::{CsvVenue, VenueRow};

use crate::store::schema::SCHEMA_SQL;

/// Errors raised while building the venue database.
#[derive(Debug, Snafu)]
pub enum IngestError {
    #[snafu(display("failed to open CSV file {}: {source}", path.display()))]
    OpenCsv { path: PathBuf, source: csv::Error },

    #[snafu(display("malformed CSV record {record}: {source}"))]
    ReadRecord { record: u64, source: csv::Error },

    #[snafu(display("failed to prepare {}: {source}", path.display()))]
    PrepareTarget { path: PathBuf, source: std::io::Error },

    #[snafu(display("database write to {} failed: {source}", path.display()))]
    Write { path: PathBuf, source: rusqlite::Error },

    #[snafu(display("failed to move {} into place at {}: {source}", from.display(), to.display()))]
    Persist {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// Outcome of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Records read from the CSV, including skipped ones.
    pub rows_read: u64,
    /// Records dropped for a blank `entity_id` or `name`.
    pub skipped: u64,
    /// Rows in the table after duplicate ids were replaced.
    pub venue_count: u64,
    pub distinct_chains: u64,
    pub distinct_dmas: u64,
}

impl std::fmt::Display for IngestReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "read {} rows, skipped {}, stored {} venues; distinct chains: {}, distinct DMAs: {}",
            self.rows_read, self.skipped, self.venue_count, self.distinct_chains, self.distinct_dmas
        )
    }
}

const INSERT_VENUE_SQL: &str = "INSERT OR REPLACE INTO venues (
    entity_id, entity_type, name, foot_traffic, sales, avg_dwell_time_min, area_sqft, ft_per_sqft,
    geolocation, country, state_code, state_name, city, postal_code, formatted_city, street_address,
    sub_category, dma, cbsa, chain_id, chain_name, store_id, date_opened, date_closed
) VALUES (
    :entity_id, :entity_type, :name, :foot_traffic, :sales, :avg_dwell_time_min, :area_sqft, :ft_per_sqft,
    :geolocation, :country, :state_code, :state_name, :city, :postal_code, :formatted_city, :street_address,
    :sub_category, :dma, :cbsa, :chain_id, :chain_name, :store_id, :date_opened, :date_closed
)";

/// Rebuild the database at `db_path` from the CSV file at `csv_path`.
pub fn build_database(csv_path: &Path, db_path: &Path) -> Result<IngestReport, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(csv_path)
        .context(OpenCsvSnafu { path: csv_path })?;

    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(PrepareTargetSnafu { path: parent })?;
    }
    let staging = staging_path(db_path);
    remove_if_exists(&staging).context(PrepareTargetSnafu { path: &staging })?;

    let report = match write_staging(&mut reader, &staging) {
        Ok(report) => report,
        Err(e) => {
            // Best effort; report the write error.
            let _ = remove_if_exists(&staging);
            return Err(e);
        }
    };

    fs::rename(&staging, db_path).context(PersistSnafu {
        from: &staging,
        to: db_path,
    })?;

    tracing::info!(
        db = %db_path.display(),
        rows_read = report.rows_read,
        skipped = report.skipped,
        venues = report.venue_count,
        "venue database built"
    );
    Ok(report)
}

fn write_staging<R: std::io::Read>(reader: &mut csv::Reader<R>, staging: &Path) -> Result<IngestReport, IngestError> {
    let mut conn = Connection::open(staging).context(WriteSnafu { path: staging })?;
    conn.execute_batch(SCHEMA_SQL).context(WriteSnafu { path: staging })?;

    let tx = conn.transaction().context(WriteSnafu { path: staging })?;
    let (rows_read, skipped) = insert_rows(&tx, reader, staging)?;
    tx.commit().context(WriteSnafu { path: staging })?;

    let count = |sql: &str| -> Result<u64, IngestError> {
        let n: i64 = conn.query_row(sql, [], |row| row.get(0)).context(WriteSnafu { path: staging })?;
        Ok(n.max(0) as u64)
    };

    Ok(IngestReport {
        rows_read,
        skipped,
        venue_count: count("SELECT COUNT(*) FROM venues")?,
        distinct_chains: count("SELECT COUNT(DISTINCT chain_name) FROM venues")?,
        distinct_dmas: count("SELECT COUNT(DISTINCT dma) FROM venues WHERE dma IS NOT NULL")?,
    })
}

fn insert_rows<R: std::io::Read>(
    tx: &Transaction<'_>,
    reader: &mut csv::Reader<R>,
    staging: &Path,
) -> Result<(u64, u64), IngestError> {
    let mut stmt = tx.prepare(INSERT_VENUE_SQL).context(WriteSnafu { path: staging })?;
    let mut rows_read = 0u64;
    let mut skipped = 0u64;

    for record in reader.deserialize::<CsvVenue>() {
        rows_read += 1;
        let raw = record.context(ReadRecordSnafu { record: rows_read })?;
        let Some(row) = VenueRow::from_csv(&raw) else {
            tracing::debug!(record = rows_read, "skipping record without entity_id or name");
            skipped += 1;
            continue;
        };

        stmt.execute(named_params! {
            ":entity_id": row.entity_id,
            ":entity_type": row.entity_type,
            ":name": row.name,
            ":foot_traffic": row.foot_traffic,
            ":sales": row.sales,
            ":avg_dwell_time_min": row.avg_dwell_time_min,
            ":area_sqft": row.area_sqft,
            ":ft_per_sqft": row.ft_per_sqft,
            ":geolocation": row.geolocation,
            ":country": row.country,
            ":state_code": row.state_code,
            ":state_name": row.state_name,
            ":city": row.city,
            ":postal_code": row.postal_code,
            ":formatted_city": row.formatted_city,
            ":street_address": row.street_address,
            ":sub_category": row.sub_category,
            ":dma": row.dma,
            ":cbsa": row.cbsa,
            ":chain_id": row.chain_id,
            ":chain_name": row.chain_name,
            ":store_id": row.store_id,
            ":date_opened": row.date_opened,
            ":date_closed": row.date_closed,
        })
        .context(WriteSnafu { path: staging })?;
    }

    if skipped > 0 {
        tracing::warn!(skipped, "records without entity_id or name were skipped");
    }
    Ok((rows_read, skipped))
}

fn staging_path(db_path: &Path) -> PathBuf {
    let mut name = db_path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    db_path.with_file_name(name)
}

fn remove_if_exists(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
