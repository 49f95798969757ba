use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Size of `path` in bytes, or 0 when it cannot be stat'ed.
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// False only when `path` definitely does not exist; other stat errors count as existing.
pub fn exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}

/// Moves `src` to `dst`, copying across filesystems when a rename is not possible.
///
/// The copy path keeps permissions, syncs `dst` and then removes `src`.
pub fn move_file(src: &Path, dst: &Path) -> Result<()> {
    if src == dst {
        return Ok(());
    }
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }

    tracing::debug!(src = %src.display(), dst = %dst.display(), "rename failed, copying");
    fs::copy(src, dst)?;
    File::options().write(true).open(dst)?.sync_all()?;
    fs::remove_file(src)?;
    Ok(())
}

/// Writes `data` to `path`, creating or truncating it. `mode` sets permissions
/// of a newly created file on Unix and is ignored elsewhere.
pub fn write_file(path: &Path, data: &[u8], mode: u32) -> Result<()> {
    let mut options = File::options();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut writer = BufWriter::new(options.open(path)?);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_sparse_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.as_file().set_len(10 * 1024).unwrap();
        assert_eq!(file_size(tmp.path()), 10 * 1024);
        assert_eq!(file_size(Path::new("/definitely/not/here")), 0);
    }

    #[test]
    fn exists_file_and_missing() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        assert!(exists(tmp.path()));
        let dir = tempfile::tempdir().unwrap();
        assert!(!exists(&dir.path().join("missing")));
    }

    #[test]
    fn move_file_moves_content() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.txt");
        fs::write(&src, b"Hello, Rust!").unwrap();
        let dst = dir.path().join("sub-dst.txt");

        move_file(&src, &dst).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"Hello, Rust!");
    }

    #[test]
    fn move_file_same_path_is_noop() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        move_file(tmp.path(), tmp.path()).unwrap();
        assert!(tmp.path().exists());
    }

    #[test]
    fn move_file_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(move_file(&dir.path().join("a"), &dir.path().join("b")).is_err());
    }

    #[test]
    fn write_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.txt");
        write_file(&p, b"longer content", 0o644).unwrap();
        write_file(&p, b"short", 0o644).unwrap();
        assert_eq!(fs::read(&p).unwrap(), b"short");
    }

    #[cfg(unix)]
    #[test]
    fn write_file_sets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("secret");
        write_file(&p, b"x", 0o600).unwrap();
        let mode = fs::metadata(&p).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
