//! `arkive chrome`, `arkive webp` – external binaries.

use anyhow::{Context, Result};
use arkive_core::{chrome, convert};
use std::path::Path;

pub fn run_chrome() -> Result<()> {
    println!("{}", chrome::find_chrome_exec_path().display());
    Ok(())
}

pub fn run_webp(src: &Path, dst: &Path) -> Result<()> {
    convert::webp_to_png(src, dst)
        .with_context(|| format!("convert {} to {}", src.display(), dst.display()))?;
    println!("Wrote {}", dst.display());
    Ok(())
}
