use anyhow::Context;
use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// Serializes a response in wire order: status line, `Content-Type`,
/// `Content-Length`, `Content-Encoding`, `Connection`, blank line, body.
pub fn serialize_response(resp: &Response) -> Bytes {
    let mut buf = BytesMut::with_capacity(128 + resp.body.len());

    // Status line
    buf.put_slice(resp.status.status_line().as_bytes());
    buf.put_slice(b"\r\n");

    // Headers
    if let Some(content_type) = resp.content_type {
        buf.put_slice(b"Content-Type: ");
        buf.put_slice(content_type.as_bytes());
        buf.put_slice(b"\r\n");
    }
    buf.put_slice(format!("Content-Length: {}\r\n", resp.content_length()).as_bytes());
    buf.put_slice(resp.encoding.fragment().as_bytes());
    buf.put_slice(resp.connection.fragment().as_bytes());

    // Header/body separator
    buf.put_slice(b"\r\n");

    // Body
    buf.put_slice(&resp.body);

    buf.freeze()
}

pub struct ResponseWriter {
    buffer: Bytes,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Sends the whole response in one write. Returns the bytes written.
    ///
    /// On failure nothing is retried and whatever already reached the
    /// peer stays sent.
    pub async fn write_to_stream<W>(&self, stream: &mut W) -> anyhow::Result<usize>
    where
        W: AsyncWrite + Unpin,
    {
        stream
            .write_all(&self.buffer)
            .await
            .context("writing response")?;
        stream.flush().await.context("flushing response")?;

        Ok(self.buffer.len())
    }
}
