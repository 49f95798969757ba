//! `arkive writable <dir>` – create a directory and check it accepts files.

use anyhow::Result;
use arkive_core::storage;
use std::path::Path;

pub fn run_writable(dir: &Path) -> Result<()> {
    storage::writable(dir)?;
    println!("{} is writable", dir.display());
    Ok(())
}
