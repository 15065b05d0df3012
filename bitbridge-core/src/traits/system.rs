//! Board-wide readings

use super::CapabilityError;

/// Uptime and die temperature
pub trait SystemInfo {
    /// Milliseconds since boot
    fn running_time_ms(&self) -> u64;

    /// Temperature in whole degrees Celsius
    fn temperature(&mut self) -> Result<i32, CapabilityError>;
}
