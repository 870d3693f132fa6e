// src/core/protocol/cui_frame.rs

//! Newline-delimited framing for CUI payloads carried over a byte stream, with the
//! corresponding `Encoder` and `Decoder`.

use crate::core::CuiError;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::warn;

/// The byte terminating a payload.
const LF: u8 = b'\n';
const CR: u8 = b'\r';

/// Protocol-level limit on a single payload.
pub const MAX_PAYLOAD_LEN: usize = 32 * 1024;

/// A `tokio_util::codec` implementation splitting a stream into CUI payloads.
///
/// Each payload is one line; a trailing `\r` is stripped. Empty lines are yielded as
/// empty payloads so the caller can report them. An oversized line is discarded up to
/// its terminator instead of failing the stream.
#[derive(Debug)]
pub struct CuiFrameCodec {
    max_len: usize,
    /// Where to resume scanning for a terminator.
    next_index: usize,
    /// Set while dropping the remainder of an oversized line.
    discarding: bool,
}

impl Default for CuiFrameCodec {
    fn default() -> Self {
        Self::new(MAX_PAYLOAD_LEN)
    }
}

impl CuiFrameCodec {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            next_index: 0,
            discarding: false,
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    fn take_line(src: &mut BytesMut, terminator: usize) -> Bytes {
        let mut line = src.split_to(terminator + 1);
        line.truncate(terminator);
        if line.last() == Some(&CR) {
            line.truncate(line.len() - 1);
        }
        line.freeze()
    }
}

impl Decoder for CuiFrameCodec {
    type Item = Bytes;
    type Error = CuiError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            let position = src[self.next_index..].iter().position(|b| *b == LF);
            match position {
                Some(offset) => {
                    let terminator = self.next_index + offset;
                    self.next_index = 0;
                    if self.discarding {
                        src.advance(terminator + 1);
                        self.discarding = false;
                        continue;
                    }
                    if terminator > self.max_len {
                        warn!(
                            "Dropping payload of {} bytes (limit {})",
                            terminator, self.max_len
                        );
                        src.advance(terminator + 1);
                        continue;
                    }
                    return Ok(Some(Self::take_line(src, terminator)));
                }
                None => {
                    if self.discarding {
                        src.clear();
                        self.next_index = 0;
                    } else if src.len() > self.max_len {
                        warn!(
                            "Payload exceeds {} bytes, discarding until end of line",
                            self.max_len
                        );
                        self.discarding = true;
                        src.clear();
                        self.next_index = 0;
                    } else {
                        self.next_index = src.len();
                    }
                    return Ok(None);
                }
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(frame) = self.decode(src)? {
            return Ok(Some(frame));
        }
        self.next_index = 0;
        if self.discarding || src.is_empty() {
            self.discarding = false;
            src.clear();
            return Ok(None);
        }
        let mut line = src.split();
        if line.last() == Some(&CR) {
            line.truncate(line.len() - 1);
        }
        Ok(Some(line.freeze()))
    }
}

impl Encoder<String> for CuiFrameCodec {
    type Error = CuiError;

    fn encode(&mut self, item: String, dst: &mut BytesMut) -> Result<(), Self::Error> {
        if item.len() > self.max_len {
            return Err(CuiError::PayloadTooLarge(self.max_len));
        }
        dst.reserve(item.len() + 1);
        dst.put_slice(item.as_bytes());
        dst.put_u8(LF);
        Ok(())
    }
}
