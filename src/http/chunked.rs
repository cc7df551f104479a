use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::ResponseHead;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a status line plus headers, ending with the blank line that
/// separates the head from the body.
pub fn serialize_head(head: &ResponseHead) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        head.status.as_u16(),
        head.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &head.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Head/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Frames `data` as one chunk: hex size line, data, CRLF.
///
/// Empty input encodes to nothing. A zero-length chunk is the stream
/// terminator on the wire, so it must only ever come from [`ChunkedWriter::finish`].
pub fn encode_chunk(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut buf = Vec::with_capacity(data.len() + 8);
    buf.extend_from_slice(format!("{:x}\r\n", data.len()).as_bytes());
    buf.extend_from_slice(data);
    buf.extend_from_slice(b"\r\n");
    buf
}

/// Writes a chunked response to a stream, one wire chunk per `write_chunk`
/// call, flushing after each so chunk boundaries survive to the client.
pub struct ChunkedWriter<W> {
    stream: W,
}

impl<W: AsyncWrite + Unpin> ChunkedWriter<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    /// Writes the status line and headers.
    pub async fn write_head(&mut self, head: &ResponseHead) -> anyhow::Result<()> {
        self.stream.write_all(&serialize_head(head)).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Writes one chunk and flushes it. Empty data is a no-op.
    pub async fn write_chunk(&mut self, data: &[u8]) -> anyhow::Result<()> {
        let encoded = encode_chunk(data);
        if encoded.is_empty() {
            return Ok(());
        }

        self.stream.write_all(&encoded).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Writes the zero-length terminator chunk, ending the response body.
    /// No further chunks are possible afterwards.
    pub async fn finish(&mut self) -> anyhow::Result<()> {
        self.stream.write_all(b"0\r\n\r\n").await?;
        self.stream.flush().await?;
        Ok(())
    }
}
