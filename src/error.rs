//! Error types for iffound.
//!
//! The taxonomy is deliberately flat: every failure this crate can observe is an
//! underlying file-system operation that did not succeed. Not-found,
//! permission-denied and other I/O faults share one variant; the original
//! [`std::io::Error`] is kept as the source so callers can still look at its kind.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The error type for iffound operations.
#[derive(Error, Debug)]
pub enum IfFoundError {
    /// Opening or reading the file failed
    #[error("File operation failed on {}: {source}", path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Standard Result type for iffound operations.
pub type Result<T> = std::result::Result<T, IfFoundError>;

impl IfFoundError {
    /// Create a FileError for `path` from an io::Error
    pub fn file_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileError {
            path: path.into(),
            source,
        }
    }

    /// Path the failed operation was attempted on
    pub fn path(&self) -> &Path {
        match self {
            Self::FileError { path, .. } => path,
        }
    }

    /// The underlying io::Error
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::FileError { source, .. } => source,
        }
    }

    /// Kind of the underlying io::Error
    pub fn kind(&self) -> io::ErrorKind {
        self.io_error().kind()
    }

    /// Unwrap into the underlying io::Error
    pub fn into_io_error(self) -> io::Error {
        match self {
            Self::FileError { source, .. } => source,
        }
    }
}

// Path context is lost here; prefer file_error() at call sites that know the path.
impl From<io::Error> for IfFoundError {
    fn from(err: io::Error) -> Self {
        Self::FileError {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<IfFoundError> for io::Error {
    fn from(err: IfFoundError) -> Self {
        let kind = err.kind();
        io::Error::new(kind, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display_message() {
        let err = IfFoundError::file_error(
            "/test/file.log",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            err.to_string(),
            "File operation failed on /test/file.log: no such file"
        );
    }

    #[test]
    fn test_accessors() {
        let err = IfFoundError::file_error(
            "/test/file.log",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.path(), Path::new("/test/file.log"));
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: IfFoundError = io_err.into();

        match err {
            IfFoundError::FileError { path, source } => {
                assert_eq!(path, PathBuf::new());
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
        }
    }

    #[test]
    fn test_back_to_io_error_keeps_kind() {
        let err = IfFoundError::file_error(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert!(io_err.to_string().contains("missing.txt"));
    }
}
