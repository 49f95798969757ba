//! `arkive tiny`, `arkive real-uri`, `arkive tor`.

use anyhow::{bail, Result};
use arkive_core::config::HelperConfig;
use arkive_core::net::{self, HttpClient};

pub fn run_tiny(cfg: &HelperConfig, url: &str) -> Result<()> {
    let short = HttpClient::from(&cfg.http).tiny_url(url);
    if short.is_empty() {
        bail!("tinyurl could not shorten {url}");
    }
    println!("{short}");
    Ok(())
}

pub fn run_real_uri(cfg: &HelperConfig, url: &str) -> Result<()> {
    let real = HttpClient::from(&cfg.http).real_uri(url);
    if real.is_empty() {
        bail!("could not resolve {url}");
    }
    println!("{real}");
    Ok(())
}

pub fn run_tor(cfg: &HelperConfig) -> Result<()> {
    let addr = net::via_tor_with(&cfg.tor)?;
    println!("tor proxy reachable at {addr}");
    Ok(())
}
