#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod data;
pub mod extract;
pub mod crawl;
pub mod bridge;

#[cfg(feature = "python")]
pub use bridge::pymodule::pkmncards_scraper;
