use std::io::{Read, Write};
use std::net::TcpStream;
use std::path::PathBuf;
use std::time::Duration;

use scraper::Html;

use crate::error::FetchError;

/// Source of parsed search result pages.
pub trait PageFetcher {
    fn fetch(&mut self, url: &str) -> Result<Html, FetchError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &mut F {
    fn fetch(&mut self, url: &str) -> Result<Html, FetchError> {
        (**self).fetch(url)
    }
}

/// How a URL is fetched, picked from its scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// HTTP/1.0 over a bare `TcpStream`.
    Plain,
    /// HTTPS through ureq (rustls), redirects followed.
    Tls,
}

impl Transport {
    pub fn for_url(url: &str) -> Result<Transport, FetchError> {
        if url.starts_with("https://") {
            Ok(Transport::Tls)
        } else if url.starts_with("http://") {
            Ok(Transport::Plain)
        } else {
            Err(FetchError::UnsupportedScheme {
                url: url.to_string(),
            })
        }
    }
}

/// Fetches catalog pages over HTTP or HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        HttpFetcher {
            timeout: Duration::from_secs(15),
            user_agent: format!("pkmncards-scraper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        match Transport::for_url(url)? {
            Transport::Plain => self.get_plain(url),
            Transport::Tls => self.get_tls(url),
        }
    }

    fn get_tls(&self, url: &str) -> Result<String, FetchError> {
        let agent = ureq::AgentBuilder::new()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build();
        match agent.get(url).call() {
            Ok(resp) => resp.into_string().map_err(|source| FetchError::Io {
                url: url.to_string(),
                source,
            }),
            Err(ureq::Error::Status(code, resp)) => Err(FetchError::Status {
                url: url.to_string(),
                status: format!("{} {}", code, resp.status_text()),
            }),
            Err(ureq::Error::Transport(t)) => Err(FetchError::Transport {
                url: url.to_string(),
                message: t.to_string(),
            }),
        }
    }

    fn get_plain(&self, url: &str) -> Result<String, FetchError> {
        let io_err = |source: std::io::Error| FetchError::Io {
            url: url.to_string(),
            source,
        };

        let rest = url.strip_prefix("http://").unwrap_or(url);
        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => {
                let port = p.parse::<u16>().map_err(|_| FetchError::Malformed {
                    url: url.to_string(),
                })?;
                (h, port)
            }
            None => (authority, 80),
        };

        let mut s = TcpStream::connect((host, port)).map_err(io_err)?;
        s.set_read_timeout(Some(self.timeout)).map_err(io_err)?;
        s.set_write_timeout(Some(self.timeout)).map_err(io_err)?;

        let req = format!(
            "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
            path, authority, self.user_agent
        );
        s.write_all(req.as_bytes()).map_err(io_err)?;
        s.flush().map_err(io_err)?;

        let mut buf = Vec::new();
        s.read_to_end(&mut buf).map_err(io_err)?;
        let resp = String::from_utf8_lossy(&buf);

        let status = resp.split("\r\n").next().unwrap_or("");
        if status.split_whitespace().nth(1) != Some("200") {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.to_string(),
            });
        }
        let body_idx = resp.find("\r\n\r\n").ok_or_else(|| FetchError::Malformed {
            url: url.to_string(),
        })? + 4;
        Ok(resp[body_idx..].to_string())
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&mut self, url: &str) -> Result<Html, FetchError> {
        let body = self.get(url)?;
        Ok(Html::parse_document(&body))
    }
}

/// Serves search pages saved to disk as `page-N.html`.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    pub dir: PathBuf,
}

impl DirFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirFetcher { dir: dir.into() }
    }

    pub fn page_path(&self, page: u32) -> PathBuf {
        self.dir.join(format!("page-{}.html", page))
    }
}

impl PageFetcher for DirFetcher {
    fn fetch(&mut self, url: &str) -> Result<Html, FetchError> {
        let path = self.page_path(page_number(url));
        let body = std::fs::read_to_string(&path).map_err(|source| FetchError::Io {
            url: path.display().to_string(),
            source,
        })?;
        Ok(Html::parse_document(&body))
    }
}

/// Page number encoded in a search URL ("/page/3/?s=..."); 1 when absent.
pub fn page_number(url: &str) -> u32 {
    url.split_once("/page/")
        .and_then(|(_, rest)| rest.split('/').next())
        .and_then(|n| n.parse().ok())
        .unwrap_or(1)
}
