//! Classify I/O errors into retry policy error kinds.

use std::io;

use super::policy::ErrorKind;

/// Only errors that describe the request itself are permanent; anything
/// involving the state of the filesystem may clear up.
pub fn classify_io_error(e: &io::Error) -> ErrorKind {
    match e.kind() {
        io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData | io::ErrorKind::Unsupported => {
            ErrorKind::Permanent
        }
        _ => ErrorKind::Transient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_and_other_are_transient() {
        let e = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(classify_io_error(&e), ErrorKind::Transient);
        let e = io::Error::other("sharing violation");
        assert_eq!(classify_io_error(&e), ErrorKind::Transient);
    }

    #[test]
    fn invalid_input_is_permanent() {
        let e = io::Error::from(io::ErrorKind::InvalidInput);
        assert_eq!(classify_io_error(&e), ErrorKind::Permanent);
    }
}
