//! WebP to PNG conversion through libwebp's `dwebp` tool.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{HelperError, Result};

const DWEBP: &str = "dwebp";

/// Converts the WebP image at `src` into a PNG at `dst`.
///
/// Requires `dwebp` on `PATH`; its output is discarded and a non-zero exit
/// is reported as [`HelperError::ConverterFailed`].
pub fn webp_to_png(src: &Path, dst: &Path) -> Result<()> {
    let program = which::which(DWEBP).map_err(|source| HelperError::MissingBinary {
        name: DWEBP,
        source,
    })?;

    tracing::debug!(src = %src.display(), dst = %dst.display(), "converting webp");
    let status = Command::new(&program)
        .arg(src)
        .arg("-o")
        .arg(dst)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if !status.success() {
        return Err(HelperError::ConverterFailed { program, status });
    }
    Ok(())
}
