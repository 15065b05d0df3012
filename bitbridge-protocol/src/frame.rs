//! Request framing.
//!
//! Frame format:
//! - OPCODE (1 byte): command selector, any value
//! - PAYLOAD (0-256 bytes): UTF-8 text that never contains the delimiter
//! - DELIMITER (1 byte): 0x01
//!
//! There is no length prefix and no checksum. The reader trusts the first
//! byte it sees after a completed frame to be the next opcode.

use heapless::Vec;

/// Frame terminator, also the success marker on responses
pub const DELIMITER: u8 = 0x01;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 256;

/// Maximum complete frame size (OPCODE + MAX_PAYLOAD + DELIMITER)
pub const MAX_FRAME_SIZE: usize = 1 + MAX_PAYLOAD_SIZE + 1;

/// Errors that can occur while reading or encoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeded `MAX_PAYLOAD_SIZE` before the delimiter arrived
    Overflow,
    /// Payload contains the delimiter byte
    ContainsDelimiter,
    /// Response bytes did not end with the delimiter
    MissingDelimiter,
    /// Response text is not valid UTF-8
    InvalidText,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// Payload bytes are not valid UTF-8
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodeError {
    /// Length of the longest valid UTF-8 prefix
    pub valid_up_to: usize,
}

/// A complete request frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Command selector
    pub opcode: u8,
    /// Payload data, delimiter stripped
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a frame with the given opcode and payload
    pub fn new(opcode: u8, payload: &[u8]) -> Result<Self, FrameError> {
        if payload.contains(&DELIMITER) {
            return Err(FrameError::ContainsDelimiter);
        }

        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| FrameError::Overflow)?;

        Ok(Self {
            opcode,
            payload: payload_vec,
        })
    }

    /// Create a frame with no payload
    pub fn empty(opcode: u8) -> Self {
        Self {
            opcode,
            payload: Vec::new(),
        }
    }

    /// Decode the payload as UTF-8
    pub fn payload_str(&self) -> Result<&str, DecodeError> {
        core::str::from_utf8(&self.payload).map_err(|e| DecodeError {
            valid_up_to: e.valid_up_to(),
        })
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = 2 + self.payload.len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[0] = self.opcode;
        buffer[1..1 + self.payload.len()].copy_from_slice(&self.payload);
        buffer[1 + self.payload.len()] = DELIMITER;

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }
}

/// Where the reader is inside a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReaderState {
    /// Between frames; the next byte is an opcode
    AwaitOpcode,
    /// Opcode seen; collecting payload until the delimiter
    AwaitDelimiter,
}

/// State machine for reading request frames one byte at a time
#[derive(Debug, Clone)]
pub struct FrameReader {
    state: ReaderState,
    opcode: u8,
    buffer: Vec<u8, MAX_PAYLOAD_SIZE>,
    overflowed: bool,
}

impl Default for FrameReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameReader {
    /// Create a new frame reader
    pub fn new() -> Self {
        Self {
            state: ReaderState::AwaitOpcode,
            opcode: 0,
            buffer: Vec::new(),
            overflowed: false,
        }
    }

    /// Current state
    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Drop any partial frame
    pub fn reset(&mut self) {
        self.state = ReaderState::AwaitOpcode;
        self.opcode = 0;
        self.buffer.clear();
        self.overflowed = false;
    }

    /// Feed a single byte to the reader
    ///
    /// Returns `Ok(Some(frame))` when the delimiter completes a frame,
    /// `Ok(None)` when more bytes are needed, or `Err` for a frame that
    /// could not be held. An oversized payload is drained up to its
    /// delimiter before the error is reported, so the error always lines up
    /// with exactly one request.
    pub fn push(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ReaderState::AwaitOpcode => {
                self.opcode = byte;
                self.buffer.clear();
                self.overflowed = false;
                self.state = ReaderState::AwaitDelimiter;
                Ok(None)
            }
            ReaderState::AwaitDelimiter => {
                if byte != DELIMITER {
                    if self.buffer.push(byte).is_err() {
                        self.overflowed = true;
                    }
                    return Ok(None);
                }

                if self.overflowed {
                    self.reset();
                    return Err(FrameError::Overflow);
                }

                let frame = Frame {
                    opcode: self.opcode,
                    payload: core::mem::take(&mut self.buffer),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed multiple bytes to the reader
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.push(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}
