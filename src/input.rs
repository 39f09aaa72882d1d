//! Captured standard input.
//!
//! The whole input is buffered in memory once, before the listener is bound,
//! and replayed verbatim for every request. There is no streaming: a reader
//! that never reaches EOF keeps the process in startup forever.

use axum::body::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Immutable payload served as every response body.
///
/// Cloning is cheap; all clones share one buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedInput {
    bytes: Bytes,
}

impl CapturedInput {
    /// Read `reader` to EOF and keep everything it produced.
    pub async fn capture<R>(mut reader: R) -> std::io::Result<Self>
    where
        R: AsyncRead + Unpin,
    {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await?;
        Ok(Self {
            bytes: Bytes::from(buf),
        })
    }

    /// Shared handle to the payload.
    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&'static [u8]> for CapturedInput {
    fn from(bytes: &'static [u8]) -> Self {
        Self {
            bytes: Bytes::from_static(bytes),
        }
    }
}

impl From<Vec<u8>> for CapturedInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Bytes::from(bytes),
        }
    }
}
