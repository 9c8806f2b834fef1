//! JSON-RPC message framing for the MCP stdio transport.
//!
//! Supports two framing modes:
//!
//! - **Content-Length**: `Content-Length: N\r\n\r\n<N bytes>`
//! - **Newline-delimited**: one JSON object per `\n`-terminated line (what
//!   Claude Code sends)
//!
//! [`MessageReader`] auto-detects the framing of each incoming message and
//! reports it, so the server can answer in kind.

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Largest Content-Length body accepted before any buffer is allocated.
pub const MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// Framing mode of a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    ContentLength,
    NewlineDelimited,
}

/// One decoded message and the framing it arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub body: String,
    pub framing: Framing,
}

/// Reads MCP messages from an async reader, auto-detecting Content-Length vs
/// newline framing.
pub struct MessageReader<R> {
    reader: BufReader<R>,
    buf: String,
}

impl<R: AsyncRead + Unpin> MessageReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            buf: String::new(),
        }
    }

    /// Read the next JSON-RPC message, returning `None` on EOF.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading fails, Content-Length parsing encounters
    /// malformed headers, or the declared length exceeds [`MAX_CONTENT_LENGTH`].
    pub async fn next_message(&mut self) -> io::Result<Option<Frame>> {
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf).await?;
            if n == 0 {
                return Ok(None);
            }

            let trimmed = self.buf.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix("Content-Length:") {
                let len: usize = rest
                    .trim()
                    .parse()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                if len > MAX_CONTENT_LENGTH {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("Content-Length {len} exceeds {MAX_CONTENT_LENGTH}"),
                    ));
                }

                // Skip remaining headers up to the blank separator line
                loop {
                    self.buf.clear();
                    let header_n = self.reader.read_line(&mut self.buf).await?;
                    if header_n == 0 {
                        return Err(io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            "EOF in Content-Length headers",
                        ));
                    }
                    if self.buf.trim().is_empty() {
                        break;
                    }
                }

                let mut body = vec![0u8; len];
                self.reader.read_exact(&mut body).await?;
                let body = String::from_utf8(body)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                return Ok(Some(Frame {
                    body,
                    framing: Framing::ContentLength,
                }));
            }

            return Ok(Some(Frame {
                body: trimmed.to_string(),
                framing: Framing::NewlineDelimited,
            }));
        }
    }
}

/// Encode a JSON message in Content-Length framing format.
pub fn encode_content_length(json: &str) -> Vec<u8> {
    let header = format!("Content-Length: {}\r\n\r\n", json.len());
    let mut buf = Vec::with_capacity(header.len() + json.len());
    buf.extend_from_slice(header.as_bytes());
    buf.extend_from_slice(json.as_bytes());
    buf
}

/// Write `json` in the given framing and flush.
///
/// For newline framing `json` must not contain embedded newlines; compact
/// `serde_json` output never does.
///
/// # Errors
///
/// Returns an I/O error if writing or flushing fails.
pub async fn write_message<W: AsyncWrite + Unpin>(
    writer: &mut W,
    framing: Framing,
    json: &str,
) -> io::Result<()> {
    match framing {
        Framing::ContentLength => writer.write_all(&encode_content_length(json)).await?,
        Framing::NewlineDelimited => {
            writer.write_all(json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
    }
    writer.flush().await
}
