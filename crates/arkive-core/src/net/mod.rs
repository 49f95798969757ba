//! Network helpers: final-URL resolution, liveness, tinyurl shortening, Tor probing.
//!
//! HTTP goes through libcurl (the `curl` crate) with one easy handle per call.
//! Everything here is blocking; call from `spawn_blocking` if used from async code.

mod tor;

pub use tor::{join_host_port, probe_tor, via_tor, via_tor_with};

use std::time::Duration;

use curl::easy::Easy;
use url::Url;

use crate::config::HttpConfig;
use crate::error::{HelperError, Result};

pub const DEFAULT_TINYURL_ENDPOINT: &str = "https://tinyurl.com/api-create.php";
pub const DEFAULT_CACHE_PREFIX: &str = "https://webcache.googleusercontent.com/search?q=cache:";

/// Blocking HTTP client settings shared by the link helpers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    /// Shortener API; the link is passed as the `url` query parameter.
    pub tinyurl_endpoint: String,
    /// Prepended to a link to address its web-cache copy.
    pub cache_prefix: String,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            tinyurl_endpoint: DEFAULT_TINYURL_ENDPOINT.to_string(),
            cache_prefix: DEFAULT_CACHE_PREFIX.to_string(),
        }
    }
}

impl From<&HttpConfig> for HttpClient {
    fn from(cfg: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            tinyurl_endpoint: cfg.tinyurl_endpoint.clone(),
            cache_prefix: cfg.cache_prefix.clone(),
        }
    }
}

/// Outcome of a single request.
#[derive(Debug, Clone)]
struct Response {
    code: u32,
    effective_url: Option<String>,
    body: Vec<u8>,
}

impl HttpClient {
    fn handle(&self, link: &str) -> Result<Easy> {
        let mut easy = Easy::new();
        easy.url(link)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        Ok(easy)
    }

    fn perform(&self, mut easy: Easy, keep_body: bool) -> Result<Response> {
        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                if keep_body {
                    body.extend_from_slice(data);
                }
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        Ok(Response {
            code: easy.response_code()?,
            effective_url: easy.effective_url()?.map(str::to_string),
            body,
        })
    }

    fn get(&self, link: &str, keep_body: bool) -> Result<Response> {
        let easy = self.handle(link)?;
        self.perform(easy, keep_body)
    }

    /// HEAD `link` (redirects followed) and return the final status code.
    /// Servers that refuse HEAD with 405 are asked again with GET.
    pub fn status(&self, link: &str) -> Result<u32> {
        let mut easy = self.handle(link)?;
        easy.nobody(true)?;
        let code = self.perform(easy, false)?.code;
        if code == 405 {
            tracing::debug!(link, "HEAD not allowed, retrying with GET");
            return Ok(self.get(link, false)?.code);
        }
        Ok(code)
    }

    /// Follows redirects from `link` and returns the URL that finally answered.
    /// Returns an empty string on any failure.
    pub fn real_uri(&self, link: &str) -> String {
        if Url::parse(link).is_err() {
            return String::new();
        }
        match self.get(link, false) {
            Ok(resp) => resp.effective_url.unwrap_or_default(),
            Err(e) => {
                tracing::debug!(link, error = %e, "resolving final URL failed");
                String::new()
            }
        }
    }

    /// Reports whether `link` answers 404. Transport failures are not "not found".
    pub fn not_found(&self, link: &str) -> bool {
        match self.status(link) {
            Ok(code) => code == 404,
            Err(e) => {
                tracing::debug!(link, error = %e, "liveness probe failed");
                false
            }
        }
    }

    /// Shortens `link` through the tinyurl API. Empty string on failure.
    pub fn tiny_url(&self, link: &str) -> String {
        match self.try_tiny_url(link) {
            Ok(short) => short,
            Err(e) => {
                tracing::debug!(link, error = %e, "tinyurl request failed");
                String::new()
            }
        }
    }

    fn try_tiny_url(&self, link: &str) -> Result<String> {
        let api = Url::parse_with_params(&self.tinyurl_endpoint, &[("url", link)])?;
        let resp = self.get(api.as_str(), true)?;
        if resp.code != 200 {
            return Err(HelperError::HttpStatus {
                url: api.into(),
                code: resp.code,
            });
        }
        let body = String::from_utf8_lossy(&resp.body).trim().to_string();
        if body == "Error" {
            return Ok(String::new());
        }
        Ok(body)
    }

    /// Web-cache address of `link`.
    pub fn cache_url(&self, link: &str) -> String {
        format!("{}{}", self.cache_prefix, link)
    }
}

/// [`HttpClient::real_uri`] with default settings.
pub fn real_uri(link: &str) -> String {
    HttpClient::default().real_uri(link)
}

/// [`HttpClient::tiny_url`] with default settings.
pub fn tiny_url(link: &str) -> String {
    HttpClient::default().tiny_url(link)
}

/// [`HttpClient::not_found`] with default settings.
pub fn not_found(link: &str) -> bool {
    HttpClient::default().not_found(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_url_prefixes_link() {
        let c = HttpClient::default();
        assert_eq!(
            c.cache_url("https://example.org/404"),
            "https://webcache.googleusercontent.com/search?q=cache:https://example.org/404"
        );
    }

    #[test]
    fn client_from_config() {
        let cfg = HttpConfig {
            connect_timeout_secs: 2,
            timeout_secs: 5,
            tinyurl_endpoint: "http://127.0.0.1:1/api".to_string(),
            cache_prefix: "cache:".to_string(),
        };
        let c = HttpClient::from(&cfg);
        assert_eq!(c.connect_timeout, Duration::from_secs(2));
        assert_eq!(c.timeout, Duration::from_secs(5));
        assert_eq!(c.cache_url("x"), "cache:x");
    }

    #[test]
    fn real_uri_rejects_garbage() {
        assert_eq!(real_uri("not a url"), "");
    }
}
