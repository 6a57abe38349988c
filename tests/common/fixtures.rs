//! Test fixtures for integration testing
//!
//! `VenueFixture` writes a deterministic CSV export, ingests it into a
//! temporary database, and can serve that database on an ephemeral port.

use std::path::{Path, PathBuf};

use bigbox::AppState;
use bigbox::config::NetworkConfig;
use bigbox::ingest::{IngestReport, build_database};
use bigbox::server::build_router;
use bigbox::store::{RecordStore, StoreHandle};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Valid venues in the fixture CSV.
pub const VALID_ROWS: usize = 105;

/// Rows missing `entity_id` or `name`.
pub const INVALID_ROWS: usize = 3;

const HEADER: [&str; 12] = [
    "entity_id",
    "entity_type",
    "name",
    "foot_traffic",
    "sub_category",
    "dma",
    "city",
    "state_code",
    "chain_id",
    "chain_name",
    "date_opened",
    "date_closed",
];

const CATEGORIES: [&str; 3] = ["Discount Stores", "Department Stores", "Warehouse Clubs"];
const DMAS: [Option<i64>; 5] = [Some(618), Some(803), Some(501), Some(609), None];
const PLACES: [(&str, &str); 3] = [("Houston", "TX"), ("Los Angeles", "CA"), ("New York", "NY")];

/// What the database should hold for one fixture venue.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureVenue {
    pub entity_id: String,
    pub name: String,
    pub chain_name: Option<&'static str>,
    pub category: &'static str,
    pub dma: Option<i64>,
    pub city: &'static str,
    pub state: &'static str,
    pub visits: i64,
    pub is_open: bool,
    /// Raw CSV cell for `foot_traffic`.
    raw_traffic: String,
}

/// The valid fixture venues.
///
/// Chains: Walmart for `i < 50`, Target for `50..80`, Costco for `80..100`,
/// blank for the rest. Every eleventh row has non-numeric traffic and every
/// sixth row is closed.
pub fn venues() -> Vec<FixtureVenue> {
    (0..VALID_ROWS)
        .map(|i| {
            let chain_name = match i {
                0..50 => Some("Walmart"),
                50..80 => Some("Target"),
                80..100 => Some("Costco"),
                _ => None,
            };
            let name = match (chain_name, i % 2) {
                (Some("Walmart"), 0) => format!("Walmart Supercenter #{i}"),
                (Some("Walmart"), _) => format!("walmart neighborhood market #{i}"),
                (Some(chain), _) => format!("{chain} #{i}"),
                (None, _) => format!("Independent Market #{i}"),
            };
            let (raw_traffic, visits) = if i % 11 == 0 {
                ("n/a".to_string(), 0)
            } else {
                let v = ((i as i64) * 7919) % 100_000;
                (v.to_string(), v)
            };
            let (city, state) = PLACES[i % 3];

            FixtureVenue {
                entity_id: format!("v{i:03}"),
                name,
                chain_name,
                category: CATEGORIES[i % 3],
                dma: DMAS[i % 5],
                city,
                state,
                visits,
                is_open: i % 6 != 0,
                raw_traffic,
            }
        })
        .collect()
}

/// Write the fixture CSV, valid rows followed by invalid ones.
pub fn write_csv(path: &Path) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;

    for v in venues() {
        let dma = v.dma.map(|d| d.to_string()).unwrap_or_default();
        writer.write_record([
            v.entity_id.as_str(),
            "",
            v.name.as_str(),
            v.raw_traffic.as_str(),
            v.category,
            dma.as_str(),
            v.city,
            v.state,
            "",
            v.chain_name.unwrap_or(""),
            "2015-03-01",
            if v.is_open { "" } else { "2022-01-15" },
        ])?;
    }

    writer.write_record(["", "venue", "No Id Store", "10", "", "", "", "", "", "", "", ""])?;
    writer.write_record(["x001", "venue", "", "10", "", "", "", "", "", "", "", ""])?;
    writer.write_record(["   ", "venue", "Blank Id Store", "10", "", "", "", "", "", "", "", ""])?;
    writer.flush()?;
    Ok(())
}

/// An ingested fixture database in a temporary directory.
pub struct VenueFixture {
    _dir: TempDir,
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    pub report: IngestReport,
}

impl VenueFixture {
    pub fn build() -> Self {
        let dir = TempDir::new().expect("failed to create temp directory");
        let csv_path = dir.path().join("venues.csv");
        let db_path = dir.path().join("data").join("bigbox.sqlite");

        write_csv(&csv_path).expect("failed to write fixture CSV");
        let report = build_database(&csv_path, &db_path).expect("failed to build fixture database");

        Self {
            _dir: dir,
            csv_path,
            db_path,
            report,
        }
    }

    pub fn open_store(&self) -> RecordStore {
        RecordStore::open(&self.db_path).expect("failed to open fixture database")
    }

    /// Serve the fixture database on `127.0.0.1` at an ephemeral port.
    pub async fn serve(&self) -> TestServer {
        TestServer::start(vec![self.db_path.clone()]).await
    }
}

/// A running API server. The task is aborted on drop.
pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve whichever of `candidates` exists first. The store opens lazily,
    /// so a missing database surfaces on the first request.
    pub async fn start(candidates: Vec<PathBuf>) -> Self {
        let state = AppState::new(StoreHandle::new(candidates));
        let router = build_router(state, &NetworkConfig::default());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has no local address");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
