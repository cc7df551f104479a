use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{Instant, sleep_until};

use crate::config::Config;
use crate::http::chunked::{ChunkedWriter, serialize_head};
use crate::http::parser::{ParseError, parse_request_head};
use crate::http::request::Request;
use crate::http::response::{ResponseHead, StatusCode};
use crate::page;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    config: Config,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Streaming(Request),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Config) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            config,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Streaming(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Streaming(req) => {
                    tracing::debug!(method = ?req.method, path = %req.path, "Streaming response");

                    self.stream_response().await?;
                    // The chunked terminator ends the response; no keep-alive.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    self.stream.shutdown().await.ok();
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until a complete request head is buffered.
    ///
    /// Returns `None` if the client closes before sending one. Request
    /// bodies are never consumed; the response does not depend on them.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_request_head(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Not HTTP at all → answer 400 and close
                    self.reject_bad_request().await?;
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client closed without sending a request
                    return Ok(None);
                }
                return Err(anyhow::anyhow!("connection closed mid request head"));
            }
        }
    }

    /// Streams the fixture document as timed chunks.
    ///
    /// Both deadlines are measured from request receipt, so the early
    /// paragraph always reaches the client strictly before the late one
    /// and the total response time is `late_delay`.
    async fn stream_response(&mut self) -> anyhow::Result<()> {
        let started = Instant::now();

        let head = ResponseHead::new(StatusCode::Ok)
            .header("Content-Type", "text/html; charset=UTF-8")
            .header("Transfer-Encoding", "chunked");

        let mut writer = ChunkedWriter::new(&mut self.stream);
        writer.write_head(&head).await?;
        writer.write_chunk(page::DOCUMENT_PROLOGUE.as_bytes()).await?;
        writer.write_chunk(page::HEADING.as_bytes()).await?;

        sleep_until(started + self.config.early_delay).await;
        writer.write_chunk(page::EARLY_PARAGRAPH.as_bytes()).await?;

        sleep_until(started + self.config.late_delay).await;
        writer.write_chunk(page::LATE_PARAGRAPH.as_bytes()).await?;
        writer.write_chunk(page::DOCUMENT_EPILOGUE.as_bytes()).await?;
        writer.finish().await?;

        Ok(())
    }

    async fn reject_bad_request(&mut self) -> anyhow::Result<()> {
        let head = ResponseHead::new(StatusCode::BadRequest)
            .header("Content-Length", "0")
            .header("Connection", "close");

        self.stream.write_all(&serialize_head(&head)).await?;
        self.stream.flush().await?;
        Ok(())
    }
}
