//! Response encoding
//!
//! A response is encoded completely before anything goes on the wire, so a
//! command that fails never leaves half a result behind.

use heapless::Vec;

use crate::frame::{FrameError, DELIMITER};

/// Success marker, written after every result
pub const SUCCESS_MARKER: u8 = DELIMITER;

/// Failure marker, written instead of a result
pub const ERROR_MARKER: [u8; 2] = [0x02, DELIMITER];

/// Maximum result text length in bytes
pub const MAX_TEXT_LEN: usize = 256;

/// Maximum encoded response size (TEXT + SUCCESS_MARKER)
pub const MAX_RESPONSE_SIZE: usize = MAX_TEXT_LEN + 1;

/// What goes back to the host for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response<'a> {
    /// Result text followed by the success marker; empty text is a bare marker
    Success(&'a str),
    /// The error marker
    Failure,
    /// Nothing at all (radio poll with no packet)
    Silent,
}

impl<'a> Response<'a> {
    /// Encode this response into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        match self {
            Response::Success(text) => {
                let bytes = text.as_bytes();
                let len = bytes.len() + 1;
                if bytes.contains(&DELIMITER) {
                    return Err(FrameError::ContainsDelimiter);
                }
                if bytes.len() > MAX_TEXT_LEN || buffer.len() < len {
                    return Err(FrameError::BufferTooSmall);
                }
                buffer[..bytes.len()].copy_from_slice(bytes);
                buffer[bytes.len()] = SUCCESS_MARKER;
                Ok(len)
            }
            Response::Failure => {
                if buffer.len() < ERROR_MARKER.len() {
                    return Err(FrameError::BufferTooSmall);
                }
                buffer[..ERROR_MARKER.len()].copy_from_slice(&ERROR_MARKER);
                Ok(ERROR_MARKER.len())
            }
            Response::Silent => Ok(0),
        }
    }

    /// Encode this response into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_RESPONSE_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_RESPONSE_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }

    /// Interpret the bytes a peer received for one request
    pub fn from_wire(bytes: &'a [u8]) -> Result<Self, FrameError> {
        if bytes.is_empty() {
            return Ok(Response::Silent);
        }
        if bytes == ERROR_MARKER {
            return Ok(Response::Failure);
        }
        let (last, text) = bytes.split_last().ok_or(FrameError::MissingDelimiter)?;
        if *last != SUCCESS_MARKER {
            return Err(FrameError::MissingDelimiter);
        }
        core::str::from_utf8(text)
            .map(Response::Success)
            .map_err(|_| FrameError::InvalidText)
    }
}
