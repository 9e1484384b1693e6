//! Zero-value reader substituted for a file that could not be opened.
//!
//! A [`ZeroReader`] never yields data: every read reports end-of-input, no matter
//! how large the buffer is or how often it is called. It keeps the error that
//! caused it to be handed out so a caller that cares can find out why.

use crate::error::IfFoundError;
use std::io::{self, BufRead, Read};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};

/// Always-empty reader carrying an optional failure cause
#[derive(Debug, Default)]
pub struct ZeroReader {
    cause: Option<IfFoundError>,
}

impl ZeroReader {
    /// Create a zero reader remembering `cause`
    pub fn new(cause: impl Into<IfFoundError>) -> Self {
        Self {
            cause: Some(cause.into()),
        }
    }

    /// Create a zero reader from a cause that may be absent
    pub fn from_cause(cause: Option<IfFoundError>) -> Self {
        Self { cause }
    }

    /// The error that caused this reader to be used in place of a real one
    pub fn cause(&self) -> Option<&IfFoundError> {
        self.cause.as_ref()
    }

    /// Consume the reader, yielding its cause
    pub fn into_cause(self) -> Option<IfFoundError> {
        self.cause
    }
}

impl Read for ZeroReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Ok(0)
    }
}

impl BufRead for ZeroReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(&[])
    }

    fn consume(&mut self, _amt: usize) {}
}

impl AsyncRead for ZeroReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        // Leaving the buffer untouched signals EOF
        Poll::Ready(Ok(()))
    }
}
