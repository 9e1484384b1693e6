//! Path-bound lookup handle with fallback-on-failure accessors.
//!
//! [`IfFound`] holds a path and nothing else. Each accessor performs its own
//! open or read when called; nothing is cached between calls, so two calls may
//! observe different content if the file changes in between.
//!
//! # Failure contract
//!
//! - [`IfFound::bytes`] and [`IfFound::string`] never fail. Any error turns into
//!   an empty value, so a missing file reads exactly like an empty one. Callers
//!   who need to tell the two apart should use [`IfFound::open`].
//! - [`IfFound::reader`] never fails either, but it keeps the error: the
//!   returned [`FoundReader`] is either the open file or a [`ZeroReader`]
//!   holding the cause.
//!
//! The async accessors follow the same contract on top of `tokio::fs`.

use crate::error::{IfFoundError, Result};
use crate::zero_reader::ZeroReader;
use bstr::ByteSlice;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};

/// A file at a path, fetched lazily and safely
///
/// Construction performs no I/O and no validation of the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IfFound {
    path: PathBuf,
}

impl IfFound {
    /// Create a lookup handle for `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The path this handle is bound to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file for reading, surfacing the error
    pub fn open(&self) -> Result<File> {
        let file = File::open(&self.path).map_err(|e| self.error(e))?;
        log::trace!("Opened {}", self.path.display());
        Ok(file)
    }

    /// Open the file as a reader, substituting a [`ZeroReader`] on failure
    ///
    /// The open file is closed when the returned reader is dropped or passed to
    /// [`FoundReader::close`].
    pub fn reader(&self) -> FoundReader {
        self.open().into()
    }

    /// Read the whole file, or an empty `Vec` if it cannot be read
    pub fn bytes(&self) -> Vec<u8> {
        match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) => {
                self.log_fallback(&e);
                Vec::new()
            }
        }
    }

    /// Read the whole file as text, or `""` if it cannot be read
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn string(&self) -> String {
        decode(self.bytes())
    }

    /// Async form of [`IfFound::open`]
    pub async fn open_async(&self) -> Result<tokio::fs::File> {
        let file = tokio::fs::File::open(&self.path)
            .await
            .map_err(|e| self.error(e))?;
        log::trace!("Opened {}", self.path.display());
        Ok(file)
    }

    /// Async form of [`IfFound::reader`]
    pub async fn reader_async(&self) -> AsyncFoundReader {
        self.open_async().await.into()
    }

    /// Async form of [`IfFound::bytes`]
    pub async fn bytes_async(&self) -> Vec<u8> {
        match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                self.log_fallback(&e);
                Vec::new()
            }
        }
    }

    /// Async form of [`IfFound::string`]
    pub async fn string_async(&self) -> String {
        decode(self.bytes_async().await)
    }

    fn error(&self, source: io::Error) -> IfFoundError {
        self.log_fallback(&source);
        IfFoundError::file_error(&self.path, source)
    }

    fn log_fallback(&self, err: &io::Error) {
        log::debug!(
            "Falling back to empty content for {}: {}",
            self.path.display(),
            err
        );
    }
}

fn decode(content: Vec<u8>) -> String {
    String::from_utf8(content).unwrap_or_else(|e| e.into_bytes().to_str_lossy().into_owned())
}

impl From<&str> for IfFound {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for IfFound {
    fn from(path: String) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }
}

impl From<&Path> for IfFound {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for IfFound {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

fn missing_cause() -> IfFoundError {
    IfFoundError::from(io::Error::from(io::ErrorKind::NotFound))
}

/// Reader returned by [`IfFound::reader`]
///
/// Either the open file or the zero reader that stands in for it. Reading from
/// the `Zero` variant reports end-of-input immediately.
#[derive(Debug)]
pub enum FoundReader {
    /// The file was opened
    File(File),
    /// The file could not be opened
    Zero(ZeroReader),
}

impl FoundReader {
    /// Whether the file was opened
    pub fn is_found(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Whether this is the zero reader stand-in
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero(_))
    }

    /// The zero reader, if the file could not be opened
    pub fn as_zero(&self) -> Option<&ZeroReader> {
        match self {
            Self::File(_) => None,
            Self::Zero(zero) => Some(zero),
        }
    }

    /// Why the file could not be opened, if it could not
    pub fn cause(&self) -> Option<&IfFoundError> {
        self.as_zero().and_then(ZeroReader::cause)
    }

    /// Convert back into a plain result
    ///
    /// A zero reader with no recorded cause maps to a not-found error.
    pub fn into_result(self) -> Result<File> {
        match self {
            Self::File(file) => Ok(file),
            Self::Zero(zero) => Err(zero.into_cause().unwrap_or_else(missing_cause)),
        }
    }

    /// Release the file handle now instead of at end of scope
    pub fn close(self) {
        drop(self);
    }
}

impl From<Result<File>> for FoundReader {
    fn from(result: Result<File>) -> Self {
        match result {
            Ok(file) => Self::File(file),
            Err(e) => Self::Zero(ZeroReader::new(e)),
        }
    }
}

impl Read for FoundReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(file) => file.read(buf),
            Self::Zero(zero) => zero.read(buf),
        }
    }
}

/// Reader returned by [`IfFound::reader_async`]
#[derive(Debug)]
pub enum AsyncFoundReader {
    /// The file was opened
    File(tokio::fs::File),
    /// The file could not be opened
    Zero(ZeroReader),
}

impl AsyncFoundReader {
    /// Whether the file was opened
    pub fn is_found(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Whether this is the zero reader stand-in
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero(_))
    }

    /// The zero reader, if the file could not be opened
    pub fn as_zero(&self) -> Option<&ZeroReader> {
        match self {
            Self::File(_) => None,
            Self::Zero(zero) => Some(zero),
        }
    }

    /// Why the file could not be opened, if it could not
    pub fn cause(&self) -> Option<&IfFoundError> {
        self.as_zero().and_then(ZeroReader::cause)
    }

    /// Convert back into a plain result
    pub fn into_result(self) -> Result<tokio::fs::File> {
        match self {
            Self::File(file) => Ok(file),
            Self::Zero(zero) => Err(zero.into_cause().unwrap_or_else(missing_cause)),
        }
    }
}

impl From<Result<tokio::fs::File>> for AsyncFoundReader {
    fn from(result: Result<tokio::fs::File>) -> Self {
        match result {
            Ok(file) => Self::File(file),
            Err(e) => Self::Zero(ZeroReader::new(e)),
        }
    }
}

impl AsyncRead for AsyncFoundReader {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        match self.get_mut() {
            Self::File(file) => Pin::new(file).poll_read(cx, buf),
            Self::Zero(zero) => Pin::new(zero).poll_read(cx, buf),
        }
    }
}
