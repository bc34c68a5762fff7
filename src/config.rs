use std::path::PathBuf;
use std::time::Duration;

/// Catalog the scraper targets.
pub const DEFAULT_BASE_URL: &str = "https://pkmncards.com";

/// Search for cards with regulation marks I, H and G (the legal ones).
pub const DEFAULT_QUERY: &str = "mark%3Ai%2Ch%2Cg";

/// Pause after each page.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(1);

pub const DEFAULT_OUTPUT: &str = "pokemon_cards.json";

/// Settings for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    /// Already URL-encoded search string.
    pub query: String,
    /// Only scrape the first page.
    pub test_mode: bool,
    pub page_delay: Duration,
    pub output: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: DEFAULT_QUERY.to_string(),
            test_mode: false,
            page_delay: DEFAULT_PAGE_DELAY,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ScrapeConfig {
    /// URL of a search results page (1-based).
    pub fn page_url(&self, page: u32) -> String {
        let base = self.base_url.trim_end_matches('/');
        let params = format!("?s={}&sort=date&ord=auto&display=text", self.query);
        if page <= 1 {
            format!("{}/{}", base, params)
        } else {
            format!("{}/page/{}/{}", base, page, params)
        }
    }
}
