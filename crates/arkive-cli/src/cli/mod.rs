//! CLI for the arkive helper library.

mod commands;

use anyhow::Result;
use arkive_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{
    run_chrome, run_extract, run_filename, run_is_url, run_normalize, run_rand, run_real_uri,
    run_tiny, run_tor, run_webp, run_writable,
};

/// Top-level CLI for the arkive helpers.
#[derive(Debug, Parser)]
#[command(name = "arkive")]
#[command(about = "arkive: helpers for archiving web pages", long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG still takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract and clean every URL in the given text (or piped stdin).
    Extract {
        /// Text to scan; reads stdin when omitted.
        text: Vec<String>,
        /// Replace links that answer 404 with their web-cache URL.
        #[arg(long)]
        fallback: bool,
    },

    /// Strip tracking parameters from a single URL.
    Normalize { url: String },

    /// Report whether the text contains a URL.
    IsUrl { text: String },

    /// Print the archive file name for a link.
    Filename {
        link: String,
        /// Content type used to pick the extension.
        #[arg(long, default_value = "")]
        content_type: String,
    },

    /// Shorten a URL through tinyurl.
    Tiny { url: String },

    /// Follow redirects and print the final URL.
    RealUri { url: String },

    /// Check that the Tor SOCKS proxy is reachable.
    Tor,

    /// Print the path of the Chrome/Chromium executable.
    Chrome,

    /// Convert a WebP image to PNG using dwebp.
    Webp { src: PathBuf, dst: PathBuf },

    /// Print a random string.
    Rand {
        length: usize,
        /// `upper`/`capital`, `lower`, or anything else for alphanumeric.
        #[arg(long, default_value = "")]
        alphabet: String,
    },

    /// Ensure a directory exists and is writable.
    Writable { dir: PathBuf },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Extract { text, fallback } => run_extract(&cfg, &text, fallback)?,
            CliCommand::Normalize { url } => run_normalize(&cfg, &url)?,
            CliCommand::IsUrl { text } => run_is_url(&text)?,
            CliCommand::Filename { link, content_type } => run_filename(&link, &content_type)?,
            CliCommand::Tiny { url } => run_tiny(&cfg, &url)?,
            CliCommand::RealUri { url } => run_real_uri(&cfg, &url)?,
            CliCommand::Tor => run_tor(&cfg)?,
            CliCommand::Chrome => run_chrome()?,
            CliCommand::Webp { src, dst } => run_webp(&src, &dst)?,
            CliCommand::Rand { length, alphabet } => run_rand(length, &alphabet)?,
            CliCommand::Writable { dir } => run_writable(&dir)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
