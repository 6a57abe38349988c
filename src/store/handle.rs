//! Process-wide, lazily opened store handle.

use std::path::PathBuf;
use std::sync::Arc;

use snafu::ResultExt;
use tokio::sync::OnceCell;

use super::error::WorkerSnafu;
use super::{RecordStore, StoreError};

/// Shares one [`RecordStore`] across all request handlers.
///
/// The store is opened on first use. Callers that arrive while the open is in
/// flight wait on the same initialization and receive the same `Arc`. A failed
/// open leaves the handle empty so the error is reported again to the next caller.
#[derive(Debug)]
pub struct StoreHandle {
    candidates: Vec<PathBuf>,
    cell: OnceCell<Arc<RecordStore>>,
}

impl StoreHandle {
    /// Handle that will open the first existing path among `candidates`.
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            cell: OnceCell::new(),
        }
    }

    /// Handle around an already opened store.
    pub fn from_store(store: RecordStore) -> Self {
        Self {
            candidates: vec![store.path().to_path_buf()],
            cell: OnceCell::new_with(Some(Arc::new(store))),
        }
    }

    /// Whether the store has been opened.
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    /// The shared store, opening it on first call.
    pub async fn get(&self) -> Result<Arc<RecordStore>, StoreError> {
        self.cell
            .get_or_try_init(|| async {
                let candidates = self.candidates.clone();
                let store = tokio::task::spawn_blocking(move || RecordStore::open_first(&candidates))
                    .await
                    .context(WorkerSnafu)??;
                Ok::<_, StoreError>(Arc::new(store))
            })
            .await
            .cloned()
    }

    /// Run a blocking read against the store on the blocking thread pool.
    pub async fn read<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&RecordStore) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.get().await?;
        tokio::task::spawn_blocking(move || f(&store)).await.context(WorkerSnafu)?
    }
}
