//! Packet radio trait

use heapless::String;

use super::CapabilityError;

/// Longest message a single packet carries
pub const MAX_PACKET_LEN: usize = 251;

/// A received message
pub type Packet = String<MAX_PACKET_LEN>;

/// A broadcast packet radio with groups and power levels
pub trait Radio {
    /// Power the radio up
    fn enable(&mut self) -> Result<(), CapabilityError>;

    /// Power the radio down, dropping queued packets
    fn disable(&mut self) -> Result<(), CapabilityError>;

    /// Only exchange packets with radios in this group
    fn set_group(&mut self, group: u8) -> Result<(), CapabilityError>;

    /// Transmit power level (0-7)
    fn set_power(&mut self, power: u8) -> Result<(), CapabilityError>;

    /// Broadcast a message
    fn send(&mut self, message: &str) -> Result<(), CapabilityError>;

    /// Take the oldest queued message, if any
    fn receive(&mut self) -> Result<Option<Packet>, CapabilityError>;
}
