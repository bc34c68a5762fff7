use std::thread;

use super::fetch::PageFetcher;
use super::pages::total_pages;
use crate::config::ScrapeConfig;
use crate::data::card::CardRecord;
use crate::error::CrawlError;
use crate::extract::card::CardExtractor;

/// Walks every search result page and collects the cards on them.
pub struct Crawler<F: PageFetcher> {
    config: ScrapeConfig,
    fetcher: F,
    extractor: CardExtractor,
}

impl<F: PageFetcher> Crawler<F> {
    pub fn new(config: ScrapeConfig, fetcher: F) -> Self {
        Crawler {
            config,
            fetcher,
            extractor: CardExtractor::new(),
        }
    }

    pub fn extractor(&self) -> &CardExtractor {
        &self.extractor
    }

    /// Scrape all pages. Cards come back in first-seen order.
    ///
    /// Only a failure to fetch the first page is an error; later pages that
    /// fail are logged and skipped.
    pub fn run(&mut self) -> Result<Vec<CardRecord>, CrawlError> {
        let first = self
            .fetcher
            .fetch(&self.config.page_url(1))
            .map_err(|e| {
                loge!("Error fetching page {}: {}", self.config.page_url(1), e);
                CrawlError::FirstPage(e)
            })?;

        let total = if self.config.test_mode {
            1
        } else {
            total_pages(&first)
        };
        logf!(
            "Found {} pages to scrape{}",
            total,
            if self.config.test_mode { " (test mode)" } else { "" }
        );

        let mut cards = Vec::new();
        let mut first = Some(first);
        for page in 1..=total {
            logf!("Scraping page {}/{}", page, total);

            let doc = match first.take() {
                Some(doc) => doc,
                None => {
                    let url = self.config.page_url(page);
                    match self.fetcher.fetch(&url) {
                        Ok(doc) => doc,
                        Err(e) => {
                            loge!("Error fetching page {}: {}", url, e);
                            continue;
                        }
                    }
                }
            };

            cards.extend(self.extractor.extract_page(&doc));

            if !self.config.page_delay.is_zero() {
                thread::sleep(self.config.page_delay);
            }
        }

        Ok(cards)
    }
}
