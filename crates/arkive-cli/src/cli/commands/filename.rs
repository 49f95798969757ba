//! `arkive filename <link>` – print the archive file name for a link.

use anyhow::Result;
use arkive_core::url_model;

pub fn run_filename(link: &str, content_type: &str) -> Result<()> {
    println!("{}", url_model::file_name(link, content_type));
    Ok(())
}
