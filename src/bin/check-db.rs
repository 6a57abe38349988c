//! Inspect the venue database and report whether it looks usable.
//!
//! Exit status: 0 when healthy, 2 when empty, 1 when it cannot be opened.

use std::path::PathBuf;
use std::process::ExitCode;

use bigbox::RecordStore;
use bigbox::client::render::thousands;
use bigbox::config::StorageConfig;
use bigbox::logging::init_tracing;
use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "check-db")]
#[command(about = "Print counts and sample rows from the venue database")]
struct Args {
    /// Database file. Defaults to the server's search locations.
    #[arg(long, env = "BIGBOX_DB_PATH")]
    db: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing("warn");
    let args = Args::parse();

    let candidates = StorageConfig { db_path: args.db }.candidate_paths();
    let report = match RecordStore::open_first(&candidates).and_then(|store| store.inspect()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("ERR: {e}");
            return ExitCode::from(1);
        }
    };

    println!("Rows in venues: {}", thousands(report.venue_count as i64));
    println!("Open venues (derived): {}", thousands(report.open_count as i64));
    println!("Distinct chains: {}", report.distinct_chains);
    println!("Top chains (by count):");
    for chain in &report.top_chains {
        println!("  {:<30} {}", chain.chain_name.as_deref().unwrap_or("(independent)"), thousands(chain.venues as i64));
    }
    println!("Sample rows:");
    for venue in &report.sample {
        println!(
            "  {} | {} | {} | {}, {} | {}",
            venue.entity_id,
            venue.name,
            venue.chain_name.as_deref().unwrap_or("-"),
            venue.city.as_deref().unwrap_or("-"),
            venue.state.as_deref().unwrap_or("-"),
            thousands(venue.visits)
        );
    }

    if report.is_healthy() {
        println!("OK: Database looks healthy.");
        ExitCode::SUCCESS
    } else {
        eprintln!("ERR: Database appears empty or unreadable.");
        ExitCode::from(2)
    }
}
