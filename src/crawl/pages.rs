use scraper::{Html, Selector};

pub const LAST_PAGE_SELECTOR: &str = "span.last-page-link";

/// Number of search result pages, read from the "last page" marker.
///
/// The marker reads like "/ 41". Any structural or numeric problem gives 1.
pub fn total_pages(page: &Html) -> u32 {
    let Some(marker) = Selector::parse(LAST_PAGE_SELECTOR)
        .ok()
        .and_then(|s| page.select(&s).next())
    else {
        return 1;
    };

    let text = marker.text().collect::<String>();
    let tail = text.trim().rsplit('/').next().unwrap_or("").trim();
    match tail.parse::<u32>() {
        Ok(n) if n > 0 => n,
        Ok(_) => 1,
        Err(e) => {
            loge!("Error getting total pages from {:?}: {}", text.trim(), e);
            1
        }
    }
}
