use std::fs;
use std::io;
use std::path::Path;

use crate::error::{HelperError, Result};
use crate::retry::{run_with_retry, RetryPolicy};

/// Name of the probe file created (and removed) by [`writable`].
pub const WRITABLE_PROBE: &str = "._check_writable";

/// Ensures `dir` exists (creating parents) and that files can be created in it.
pub fn writable(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;

    let probe = dir.join(WRITABLE_PROBE);
    match fs::File::create(&probe) {
        Ok(f) => {
            drop(f);
            if let Err(e) = fs::remove_file(&probe) {
                tracing::warn!(path = %probe.display(), error = %e, "failed to remove writable probe");
            }
            Ok(())
        }
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "writable probe failed");
            Err(HelperError::NotWritable {
                dir: dir.to_path_buf(),
            })
        }
    }
}

/// True when `path` exists and is a directory.
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Removes a file or directory tree, retrying per `policy`.
///
/// Some platforms keep recently used files locked for a moment after close;
/// a few retries with a short pause get past that. A missing path is success.
pub fn retry_remove_all(path: &Path, policy: &RetryPolicy) -> Result<()> {
    run_with_retry(policy, || remove_all(path))?;
    Ok(())
}

fn remove_all(path: &Path) -> io::Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
