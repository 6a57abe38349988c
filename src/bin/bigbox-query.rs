//! Terminal dashboard for the venue API.
//!
//! ```sh
//! bigbox-query --ask "Show me all open Walmarts in Texas"
//! bigbox-query --chain-name Target --sort-by name --sort-dir asc --page 2
//! bigbox-query --options
//! ```

use anyhow::{Context, Result};
use bigbox::client::dma::dma_label;
use bigbox::client::render::dashboard;
use bigbox::client::smart_search::interpret;
use bigbox::client::{DashboardClient, Filters};
use bigbox::logging::init_tracing;
use bigbox::query::{OpenState, SortDirection, SortField};
use clap::Parser;

/// Rows per page in the terminal view.
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "bigbox-query")]
#[command(about = "Query the big-box venue API from the terminal")]
struct Args {
    /// API server base URL.
    #[arg(long, env = "BIGBOX_API_URL", default_value = "http://localhost:4000")]
    base_url: String,

    /// Free-text question, mapped onto filters before the flags below.
    #[arg(long)]
    ask: Option<String>,

    /// List the available filter values and exit.
    #[arg(long)]
    options: bool,

    #[arg(long)]
    chain_name: Option<String>,

    /// Nielsen DMA code.
    #[arg(long)]
    dma: Option<i64>,

    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    city: Option<String>,

    /// Two-letter state code.
    #[arg(long)]
    state: Option<String>,

    /// all, open or closed.
    #[arg(long)]
    is_open: Option<OpenState>,

    #[arg(long, default_value_t = 1)]
    page: u64,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,

    /// name or foot_traffic.
    #[arg(long)]
    sort_by: Option<SortField>,

    /// asc or desc.
    #[arg(long)]
    sort_dir: Option<SortDirection>,
}

impl Args {
    fn filters(&self) -> Filters {
        let mut filters = Filters {
            page: Some(self.page),
            page_size: Some(self.page_size),
            sort_by: Some(SortField::FootTraffic),
            sort_dir: Some(SortDirection::Desc),
            ..Default::default()
        };
        if let Some(question) = &self.ask {
            filters = interpret(question, &filters);
        }

        let text = |flag: &Option<String>, current: Option<String>| flag.clone().or(current);
        filters.chain_name = text(&self.chain_name, filters.chain_name.take());
        filters.category = text(&self.category, filters.category.take());
        filters.city = text(&self.city, filters.city.take());
        filters.state = text(&self.state, filters.state.take());
        filters.dma = self.dma.or(filters.dma);
        filters.is_open = self.is_open.or(filters.is_open);
        filters.sort_by = self.sort_by.or(filters.sort_by);
        filters.sort_dir = self.sort_dir.or(filters.sort_dir);
        filters
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("warn");
    let args = Args::parse();
    let client = DashboardClient::new(&args.base_url)?;

    if args.options {
        let options = client.options().await.context("failed to load filter options")?;
        println!("Chains: {}", options.chain_names.join(", "));
        let dmas: Vec<String> = options.dmas.iter().map(|d| format!("{d} ({})", dma_label(Some(*d)))).collect();
        println!("DMAs: {}", dmas.join(", "));
        println!("Categories: {}", options.categories.join(", "));
        return Ok(());
    }

    let filters = args.filters();
    let (summary, page) = tokio::try_join!(client.summary(&filters), client.venues(&filters))
        .with_context(|| format!("query against {} failed", client.base_url()))?;

    print!("{}", dashboard(&summary, &page));
    Ok(())
}
