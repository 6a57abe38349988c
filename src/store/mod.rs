//! Read-only record store over the SQLite venue database.
//!
//! The database file is produced offline by the ingestion script. At runtime
//! it is opened read-only, validated once, and shared by every request.
//!
//! # Execution model
//!
//! ```text
//! BoundQuery { sql, named params }
//!          ↓
//! ┌────────────────────────┐
//! │      RecordStore       │  one read-only connection behind a mutex
//! └────────────────────────┘
//!          ↓
//! ┌────────────────────────┐
//! │  venues_view (SQLite)  │  derived projection with is_open
//! └────────────────────────┘
//! ```

mod error;
mod handle;
mod report;
pub mod schema;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, Row, ToSql};
use snafu::{OptionExt, ResultExt, ensure};

pub use error::StoreError;
pub use handle::StoreHandle;
pub use report::{ChainCount, DatabaseReport};

use crate::constants::VENUES_VIEW;
use error::{LockPoisonedSnafu, MissingSchemaSnafu, NotFoundSnafu, OpenDatabaseSnafu, PrepareSnafu, QuerySnafu};

/// A SQL statement paired with its named parameter bindings.
///
/// Parameter names carry their `:` prefix, e.g. `(":chain_name", "Target")`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundQuery {
    pub sql: String,
    pub params: Vec<(String, Value)>,
}

impl BoundQuery {
    /// A statement with no parameters.
    pub fn plain(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }
}

/// Immutable venue dataset backed by a read-only SQLite connection.
#[derive(Debug)]
pub struct RecordStore {
    conn: Mutex<Connection>,
    path: PathBuf,
    record_count: u64,
}

impl RecordStore {
    /// Open the first candidate path that exists.
    pub fn open_first(candidates: &[PathBuf]) -> Result<Self, StoreError> {
        let path = candidates.iter().find(|p| p.is_file()).context(NotFoundSnafu {
            candidates: candidates.to_vec(),
        })?;
        Self::open(path)
    }

    /// Open the database at `path` read-only and verify the runtime view exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        ensure!(path.is_file(), NotFoundSnafu {
            candidates: vec![path.clone()],
        });

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context(OpenDatabaseSnafu { path: &path })?;

        let has_view: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'view' AND name = ?1",
                [VENUES_VIEW],
                |row| row.get(0),
            )
            .context(OpenDatabaseSnafu { path: &path })?;
        ensure!(has_view, MissingSchemaSnafu {
            path: &path,
            object: VENUES_VIEW,
        });

        let record_count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {VENUES_VIEW}"), [], |row| row.get(0))
            .context(OpenDatabaseSnafu { path: &path })?;

        tracing::info!(path = %path.display(), records = record_count, "venue database opened");

        Ok(Self {
            conn: Mutex::new(conn),
            path,
            record_count: record_count.max(0) as u64,
        })
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of venue records, counted when the store was opened.
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Run `query` and map every returned row with `map`.
    pub fn query_rows<T, F>(&self, query: &BoundQuery, map: F) -> Result<Vec<T>, StoreError>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().map_err(|_| LockPoisonedSnafu.build())?;
        let mut stmt = conn.prepare_cached(&query.sql).context(PrepareSnafu)?;
        let named = named_params(&query.params);
        let rows = stmt.query_map(named.as_slice(), map).context(QuerySnafu)?;
        rows.collect::<Result<Vec<_>, _>>().context(QuerySnafu)
    }

    /// Run `query`, which must return exactly one row, and map it with `map`.
    pub fn query_one<T, F>(&self, query: &BoundQuery, map: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().map_err(|_| LockPoisonedSnafu.build())?;
        let mut stmt = conn.prepare_cached(&query.sql).context(PrepareSnafu)?;
        let named = named_params(&query.params);
        stmt.query_row(named.as_slice(), map).context(QuerySnafu)
    }
}

fn named_params(params: &[(String, Value)]) -> Vec<(&str, &dyn ToSql)> {
    params.iter().map(|(name, value)| (name.as_str(), value as &dyn ToSql)).collect()
}
