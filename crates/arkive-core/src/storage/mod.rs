//! Directory and file helpers for archive output.
//!
//! Writability probes, retrying recursive removal, size/existence checks,
//! cross-device moves and buffered writes.

mod dir;
mod file;

pub use dir::{is_dir, retry_remove_all, writable, WRITABLE_PROBE};
pub use file::{exists, file_size, move_file, write_file};
