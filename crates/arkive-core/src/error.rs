//! Error type shared by the filesystem, process and network helpers.

use std::path::PathBuf;

/// Errors returned by fallible helpers.
///
/// URL normalization never produces one of these: a candidate that cannot be
/// parsed is dropped instead.
#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    /// The directory exists (or was created) but a probe file could not be written.
    #[error("'{}' is not writable", .dir.display())]
    NotWritable { dir: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// libcurl reported a transport failure (DNS, connect, timeout, ...).
    #[error("http: {0}")]
    Http(#[from] curl::Error),

    /// The server answered with a status the caller did not accept.
    #[error("{url} returned HTTP {code}")]
    HttpStatus { url: String, code: u32 },

    /// A required external binary was not found on `PATH`.
    #[error("{name} not found: {source}")]
    MissingBinary {
        name: &'static str,
        #[source]
        source: which::Error,
    },

    /// The external converter ran but exited unsuccessfully.
    #[error("{} exited with {status}", .program.display())]
    ConverterFailed {
        program: PathBuf,
        status: std::process::ExitStatus,
    },

    #[error("can not access tor proxy at {addr}: {source}")]
    TorUnreachable {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HelperError>;
