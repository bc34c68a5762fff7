use thiserror::Error;

/// Why a card produced no record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// An element the card cannot do without is missing.
    #[error("missing `{selector}` element")]
    MissingElement { selector: &'static str },
    /// A field is present but its text does not parse.
    #[error("bad {field} value {value:?}")]
    Format { field: &'static str, value: String },
    /// Same type line and text as a card already accepted this run.
    #[error("duplicate of an earlier card")]
    Duplicate,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttackParseError {
    #[error("expected exactly one `→` separator, found {count}")]
    Separator { count: usize },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("I/O error fetching {url}: {source}")]
    Io {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: String },
    #[error("malformed response from {url}")]
    Malformed { url: String },
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("unsupported URL {url}: expected http:// or https://")]
    UnsupportedScheme { url: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("bad JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("could not fetch the first search page: {0}")]
    FirstPage(#[source] FetchError),
}
