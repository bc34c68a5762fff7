use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use pkmncards_scraper::config::{ScrapeConfig, DEFAULT_BASE_URL, DEFAULT_OUTPUT, DEFAULT_QUERY};
use pkmncards_scraper::crawl::crawler::Crawler;
use pkmncards_scraper::crawl::fetch::{DirFetcher, HttpFetcher, PageFetcher};
use pkmncards_scraper::data::store::save_cards;
use pkmncards_scraper::{loge, log};

#[derive(Parser)]
#[command(name = "pkmncards-scrape", about = "Scrape Pokemon cards from pkmncards.com")]
struct Cli {
    /// Run in test mode (only scrape first page)
    #[arg(long)]
    test: bool,
    /// Where to write the JSON array of cards
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Catalog base URL (plain http only)
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// URL-encoded search string
    #[arg(long, default_value = DEFAULT_QUERY)]
    query: String,
    /// Read saved pages (page-N.html) from this directory instead of the network
    #[arg(long)]
    pages_dir: Option<PathBuf>,
    /// Pause after each page, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
    /// Also append log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log every parsed card
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ScrapeConfig {
        ScrapeConfig {
            base_url: self.base_url.clone(),
            query: self.query.clone(),
            test_mode: self.test,
            page_delay: Duration::from_millis(self.delay_ms),
            output: self.output.clone(),
        }
    }
}

fn scrape<F: PageFetcher>(config: ScrapeConfig, fetcher: F) -> anyhow::Result<()> {
    let output = config.output.clone();
    let cards = Crawler::new(config, fetcher).run()?;
    if let Err(e) = save_cards(&output, &cards) {
        loge!("Error saving to JSON file: {}", e);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    log::init(cli.log_file.clone(), cli.verbose);

    let config = cli.config();
    match &cli.pages_dir {
        Some(dir) => scrape(config, DirFetcher::new(dir)),
        None => scrape(config, HttpFetcher::default()),
    }
}
