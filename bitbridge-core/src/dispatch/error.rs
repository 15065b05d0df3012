//! Command error taxonomy
//!
//! Every way a request can fail has a variant here. On the wire they all
//! collapse to the same two-byte error marker; the variant only feeds local
//! logging and statistics.

use bitbridge_protocol::{CoercionError, DecodeError, FrameError};

use crate::traits::CapabilityError;

/// Why a request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// The frame itself could not be held or read
    MalformedFrame(FrameError),
    /// Payload is not valid UTF-8
    Decode(DecodeError),
    /// No registry entry for the requested name and arity
    UnknownCapability,
    /// A payload field had the wrong shape or range
    Coercion(CoercionError),
    /// The capability was reached but failed
    Capability(CapabilityError),
}

/// Coarse error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    MalformedFrame,
    Decode,
    UnknownCapability,
    Coercion,
    Capability,
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::MalformedFrame(_) => ErrorKind::MalformedFrame,
            CommandError::Decode(_) => ErrorKind::Decode,
            CommandError::UnknownCapability => ErrorKind::UnknownCapability,
            CommandError::Coercion(_) => ErrorKind::Coercion,
            CommandError::Capability(_) => ErrorKind::Capability,
        }
    }
}

impl From<FrameError> for CommandError {
    fn from(e: FrameError) -> Self {
        CommandError::MalformedFrame(e)
    }
}

impl From<DecodeError> for CommandError {
    fn from(e: DecodeError) -> Self {
        CommandError::Decode(e)
    }
}

impl From<CoercionError> for CommandError {
    fn from(e: CoercionError) -> Self {
        CommandError::Coercion(e)
    }
}

impl From<CapabilityError> for CommandError {
    fn from(e: CapabilityError) -> Self {
        CommandError::Capability(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            CommandError::from(FrameError::Overflow).kind(),
            ErrorKind::MalformedFrame
        );
        assert_eq!(
            CommandError::from(DecodeError { valid_up_to: 0 }).kind(),
            ErrorKind::Decode
        );
        assert_eq!(CommandError::UnknownCapability.kind(), ErrorKind::UnknownCapability);
        assert_eq!(
            CommandError::from(CoercionError::NotAnInteger).kind(),
            ErrorKind::Coercion
        );
        assert_eq!(
            CommandError::from(CapabilityError::NotFitted).kind(),
            ErrorKind::Capability
        );
    }
}
