//! Rebuild the venue database from a CSV snapshot.
//!
//! ```sh
//! build-db --csv "Hands-On Exercise/Bigbox Stores Metrics.csv" --db data/bigbox.sqlite
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use bigbox::constants::DB_FILE_NAME;
use bigbox::ingest::build_database;
use bigbox::logging::init_tracing;
use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "build-db")]
#[command(about = "Build the SQLite venue database from a CSV export")]
struct Args {
    /// Source CSV file with a header row.
    #[arg(long, env = "BIGBOX_CSV_PATH")]
    csv: PathBuf,

    /// Database file to (re)create.
    #[arg(long, env = "BIGBOX_DB_PATH", default_value_os_t = PathBuf::from("data").join(DB_FILE_NAME))]
    db: PathBuf,
}

fn main() -> Result<()> {
    init_tracing("info");
    let args = Args::parse();

    let report = build_database(&args.csv, &args.db)
        .with_context(|| format!("failed to build {} from {}", args.db.display(), args.csv.display()))?;

    println!("{report}");
    println!("Database written to {}", args.db.display());
    Ok(())
}
