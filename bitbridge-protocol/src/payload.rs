//! Payload field extraction and coercion
//!
//! Payloads are plain text. Multi-value payloads are comma separated
//! (`"x,y,v"`), registry references are dotted (`"object.attr"`). Fields
//! past the ones an opcode needs are ignored.

use core::num::IntErrorKind;

/// Separator between payload fields
pub const FIELD_SEPARATOR: char = ',';

/// Separator between object and attribute in a registry reference
pub const ATTR_SEPARATOR: char = '.';

/// A payload could not be turned into the values a command needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoercionError {
    /// A required field is missing
    MissingField,
    /// Field is not a decimal integer
    NotAnInteger,
    /// Integer outside the range the command accepts
    OutOfRange,
    /// Text is not a valid image description
    InvalidImage,
    /// Text is not a known gesture name
    UnknownGesture,
}

/// Return field `index` of `payload` split on `sep`
pub fn field(payload: &str, sep: char, index: usize) -> Result<&str, CoercionError> {
    payload
        .split(sep)
        .nth(index)
        .ok_or(CoercionError::MissingField)
}

/// Parse a decimal integer, allowing surrounding ASCII whitespace and a sign
pub fn parse_int(text: &str) -> Result<i32, CoercionError> {
    text.trim_matches(|c: char| c.is_ascii_whitespace())
        .parse::<i32>()
        .map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CoercionError::OutOfRange,
            _ => CoercionError::NotAnInteger,
        })
}

/// Parse an integer and check it lies in `min..=max`
pub fn parse_bounded(text: &str, min: i32, max: i32) -> Result<i32, CoercionError> {
    let value = parse_int(text)?;
    if value < min || value > max {
        return Err(CoercionError::OutOfRange);
    }
    Ok(value)
}

/// Parse comma field `index` as an integer
pub fn int_field(payload: &str, index: usize) -> Result<i32, CoercionError> {
    parse_int(field(payload, FIELD_SEPARATOR, index)?)
}

/// An `object.attr` reference into the capability registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Target<'a> {
    /// Object name, e.g. `display` or `pin0`
    pub object: &'a str,
    /// Attribute name on that object, e.g. `read_light_level`
    pub attr: &'a str,
}

impl<'a> Target<'a> {
    /// Parse `"object.attr"`; anything after a second dot is ignored
    pub fn parse(text: &'a str) -> Result<Self, CoercionError> {
        let mut parts = text.split(ATTR_SEPARATOR);
        let object = parts.next().ok_or(CoercionError::MissingField)?;
        let attr = parts.next().ok_or(CoercionError::MissingField)?;
        Ok(Self { object, attr })
    }
}
