//! Capability results

use core::fmt;

use bitbridge_protocol::MAX_TEXT_LEN;
use heapless::String;

use crate::traits::CapabilityError;

/// What a capability call produced
///
/// Rendered into the response text with [`fmt::Display`]:
///
/// | Value        | Text             |
/// |--------------|------------------|
/// | `Unit`       | empty            |
/// | `Int(n)`     | decimal, e.g. `-12` |
/// | `Bool(b)`    | `1` or `0`       |
/// | `Text(s)`    | `s` as is        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Unit,
    Int(i64),
    Bool(bool),
    Text(String<MAX_TEXT_LEN>),
}

impl Value {
    /// Copy text into a value
    pub fn text(text: &str) -> Result<Self, CapabilityError> {
        let mut owned = String::new();
        owned
            .push_str(text)
            .map_err(|_| CapabilityError::InvalidArgument)?;
        Ok(Value::Text(owned))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Value::Int(n.into())
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Value::Int(n.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => Ok(()),
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(true) => f.write_str("1"),
            Value::Bool(false) => f.write_str("0"),
            Value::Text(s) => f.write_str(s),
        }
    }
}
