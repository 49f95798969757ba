//! Tracking-parameter removal and canonical query re-encoding.

use url::Url;

use super::denylist::Denylist;
use super::pattern;

/// Strips tracker query parameters using a configurable [`Denylist`].
///
/// Stateless between calls; share one instance freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    denylist: Denylist,
}

impl Normalizer {
    pub fn new(denylist: Denylist) -> Self {
        Self { denylist }
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Normalizes a single URL.
    ///
    /// Returns an empty string when `link` does not parse as an absolute URL.
    /// Remaining query pairs are stably sorted by key and form-encoded; when
    /// every pair is stripped the `?` is dropped too. Non-ASCII path and query
    /// characters come back percent-encoded.
    ///
    /// Pairs split only on `&`. A query containing `;` is left byte-for-byte
    /// as parsed unless a tracker was actually removed, so servers that use
    /// `;` as a separator still see their parameters.
    pub fn normalize(&self, link: &str) -> String {
        let mut url = match Url::parse(link) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!(link, error = %e, "dropping unparseable URL");
                return String::new();
            }
        };

        if url.query().is_none() {
            return url.into();
        }
        let has_semicolon = url.query().is_some_and(|q| q.contains(';'));

        let mut stripped = false;
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (k, v) in url.query_pairs() {
            if self.denylist.is_tracker(&k) {
                stripped = true;
            } else {
                pairs.push((k.into_owned(), v.into_owned()));
            }
        }
        if has_semicolon && !stripped {
            return url.into();
        }
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }
        url.into()
    }

    /// Extracts every URL in `text` and normalizes it, preserving order.
    ///
    /// Candidates that fail to parse are dropped.
    pub fn extract(&self, text: &str) -> Vec<String> {
        pattern::candidates(text)
            .map(|c| self.normalize(c))
            .filter(|u| !u.is_empty())
            .collect()
    }
}
