//! `arkive extract`, `arkive normalize`, `arkive is-url`.

use anyhow::{bail, Result};
use arkive_core::config::HelperConfig;
use arkive_core::net::HttpClient;
use arkive_core::{env, url_model};

/// Print one cleaned URL per line. Empty output means no links were found.
pub fn run_extract(cfg: &HelperConfig, text: &[String], fallback: bool) -> Result<()> {
    let input = if text.is_empty() {
        env::read_stdin().join(" ")
    } else {
        text.join(" ")
    };

    let normalizer = cfg.normalizer();
    let links = if fallback {
        url_model::extract_urls_with_fallback(&normalizer, &HttpClient::from(&cfg.http), &input)
    } else {
        normalizer.extract(&input)
    };
    tracing::debug!(count = links.len(), "extracted links");

    for link in links {
        println!("{link}");
    }
    Ok(())
}

pub fn run_normalize(cfg: &HelperConfig, url: &str) -> Result<()> {
    let cleaned = cfg.normalizer().normalize(url);
    if cleaned.is_empty() {
        bail!("not a valid URL: {url}");
    }
    println!("{cleaned}");
    Ok(())
}

pub fn run_is_url(text: &str) -> Result<()> {
    println!("{}", url_model::is_url(text));
    Ok(())
}
