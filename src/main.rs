//! `bigbox-server`: the read-only venue API.
//!
//! ```sh
//! bigbox-server --port 4000 --db data/bigbox.sqlite
//! ```

use std::path::PathBuf;

use anyhow::Result;
use bigbox::AppConfig;
use bigbox::logging::init_tracing;
use clap::Parser;

/// Command line arguments. Flags override config file and environment.
#[derive(Parser, Debug)]
#[command(name = "bigbox-server")]
#[command(about = "Read-only JSON API over the big-box venue database")]
struct Args {
    /// TOML configuration file.
    #[arg(short, long, env = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// HTTP port to listen on.
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address for the HTTP server.
    #[arg(short, long)]
    bind: Option<String>,

    /// Path to the venue database.
    #[arg(long)]
    db: Option<PathBuf>,
}

impl Args {
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = AppConfig::from_toml_file(path)?;
                config.apply_env_overrides()?;
                config
            }
            None => AppConfig::load_with_layers()?,
        };
        if let Some(port) = self.port {
            config.network.http_port = port;
        }
        if let Some(bind) = &self.bind {
            config.network.http_bind_addr = bind.clone();
        }
        if let Some(db) = &self.db {
            config.storage.db_path = Some(db.clone());
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("info");

    let args = Args::parse();
    let config = args.load_config()?;
    tracing::debug!(?config, "configuration loaded");

    bigbox::server::run(config).await
}
