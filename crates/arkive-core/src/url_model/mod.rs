//! URL extraction, tracker stripping and archive file naming.
//!
//! Extraction finds `http`/`https` links in free text and runs each through
//! [`Normalizer::normalize`], which removes analytics query parameters
//! (`utm_*`, `fbclid`, ...) and re-encodes what is left in a canonical order.
//! Everything here is pure except [`extract_urls_with_fallback`], which
//! probes each link over HTTP.

mod denylist;
mod filename;
mod normalize;
mod pattern;
mod sanitize;

pub use denylist::{Denylist, MatchKind, TrackerRule};
pub use filename::{extension_for, file_name};
pub use normalize::Normalizer;
pub use pattern::is_url;
pub use sanitize::sanitize_base_name;

use std::sync::LazyLock;

use crate::net::HttpClient;

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);

/// Strips tracking parameters from `link` using the built-in denylist.
///
/// Returns an empty string when `link` cannot be parsed.
pub fn normalize(link: &str) -> String {
    DEFAULT_NORMALIZER.normalize(link)
}

/// Extracts every `http`/`https` URL in `text`, normalized, in order of appearance.
///
/// Never fails; text without links yields an empty vector.
pub fn extract_urls(text: &str) -> Vec<String> {
    DEFAULT_NORMALIZER.extract(text)
}

/// Like [`extract_urls`], but links that answer 404 are replaced by their
/// web-cache URL so the archiver still has something to fetch.
pub fn extract_urls_with_fallback(
    normalizer: &Normalizer,
    client: &HttpClient,
    text: &str,
) -> Vec<String> {
    normalizer
        .extract(text)
        .into_iter()
        .map(|link| {
            if client.not_found(&link) {
                let cached = client.cache_url(&link);
                tracing::info!(%link, %cached, "link is gone, using web cache");
                cached
            } else {
                link
            }
        })
        .collect()
}
