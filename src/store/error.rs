use std::path::PathBuf;

use snafu::Snafu;

/// Errors raised while opening or querying the venue database.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StoreError {
    #[snafu(display("venue database not found; looked in: {}", format_candidates(candidates)))]
    NotFound { candidates: Vec<PathBuf> },

    #[snafu(display("failed to open venue database at {}: {source}", path.display()))]
    OpenDatabase {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[snafu(display("venue database at {} is missing `{object}`", path.display()))]
    MissingSchema { path: PathBuf, object: String },

    #[snafu(display("failed to prepare statement: {source}"))]
    Prepare { source: rusqlite::Error },

    #[snafu(display("failed to query venue database: {source}"))]
    Query { source: rusqlite::Error },

    #[snafu(display("venue database connection lock poisoned"))]
    LockPoisoned,

    #[snafu(display("store worker task failed: {source}"))]
    Worker { source: tokio::task::JoinError },
}

impl StoreError {
    /// True for failures that mean the database cannot be served at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::OpenDatabase { .. } | StoreError::MissingSchema { .. }
        )
    }
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}
