//! Line codec for tokio.
//!
//! Decodes requests with the [`frame`](crate::frame) predicate and encodes
//! replies and relays as CRLF-terminated lines. Both directions share one
//! line capacity, 1024 bytes by default.

use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::warn;

use crate::error::{ProtocolError, Result};
use crate::frame::{frame_from, Framing};
use crate::reply::{Relay, Reply};

/// Default per-connection line capacity in bytes.
pub const DEFAULT_MAX_LINE: usize = 1024;

/// Terminator appended to every outgoing line.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Codec reading request lines and writing reply lines.
#[derive(Debug)]
pub struct RequestCodec {
    /// Offset of the first byte not yet scanned for a terminator.
    next_index: usize,
    /// Maximum line length, terminator included on output.
    max_len: usize,
}

impl RequestCodec {
    /// Create a codec with the default line capacity.
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LINE)
    }

    /// Create a codec with a custom line capacity.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }

    /// Write `text` plus CRLF, cutting `text` so the line fits the capacity.
    fn encode_line(&self, text: &str, what: &'static str, dst: &mut BytesMut) {
        let budget = self.max_len.saturating_sub(LINE_TERMINATOR.len());
        let text = if text.len() > budget {
            warn!(
                kind = what,
                len = text.len() + LINE_TERMINATOR.len(),
                limit = self.max_len,
                "Outgoing line too long, truncating"
            );
            truncate_at_char_boundary(text, budget)
        } else {
            text
        };
        dst.reserve(text.len() + LINE_TERMINATOR.len());
        dst.extend_from_slice(text.as_bytes());
        dst.extend_from_slice(LINE_TERMINATOR.as_bytes());
    }
}

impl Default for RequestCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_at_char_boundary(s: &str, mut len: usize) -> &str {
    while !s.is_char_boundary(len) {
        len -= 1;
    }
    &s[..len]
}

impl Decoder for RequestCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        match frame_from(&src[..], self.next_index) {
            Framing::Complete(range) => {
                self.next_index = 0;
                if range.len() > self.max_len {
                    return Err(ProtocolError::RequestTooLong {
                        actual: range.len(),
                        limit: self.max_len,
                    });
                }
                src.advance(range.start);
                let line = src.split_to(range.len());
                // The terminator stays buffered; it is leading whitespace
                // for the next request.
                Ok(Some(String::from_utf8_lossy(&line).into_owned()))
            }
            Framing::Incomplete { skip } => {
                src.advance(skip);
                self.next_index = src.len();

                if src.len() > self.max_len {
                    return Err(ProtocolError::RequestTooLong {
                        actual: src.len(),
                        limit: self.max_len,
                    });
                }

                Ok(None)
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        match self.decode(src)? {
            Some(line) => Ok(Some(line)),
            None => {
                // An unterminated tail never forms a request.
                src.clear();
                self.next_index = 0;
                Ok(None)
            }
        }
    }
}

impl Encoder<Reply> for RequestCodec {
    type Error = ProtocolError;

    fn encode(&mut self, reply: Reply, dst: &mut BytesMut) -> Result<()> {
        self.encode_line(&reply.to_string(), "reply", dst);
        Ok(())
    }
}

impl Encoder<Relay> for RequestCodec {
    type Error = ProtocolError;

    fn encode(&mut self, relay: Relay, dst: &mut BytesMut) -> Result<()> {
        self.encode_line(&relay.to_string(), "relay", dst);
        Ok(())
    }
}
