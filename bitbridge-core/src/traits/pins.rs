//! Edge connector pin trait

use super::CapabilityError;

/// Full-scale analog reading and PWM duty
pub const ANALOG_MAX: u16 = 1023;

/// General purpose pins on the edge connector, addressed by pin number
///
/// Pins the board does not expose are `InvalidArgument`.
pub trait EdgePins {
    /// Digital level (0 or 1)
    fn read_digital(&mut self, pin: u8) -> Result<u8, CapabilityError>;

    /// Drive the pin high or low
    fn write_digital(&mut self, pin: u8, high: bool) -> Result<(), CapabilityError>;

    /// Analog reading (0-1023)
    fn read_analog(&mut self, pin: u8) -> Result<u16, CapabilityError>;

    /// PWM duty (0-1023)
    fn write_analog(&mut self, pin: u8, duty: u16) -> Result<(), CapabilityError>;

    /// PWM period in microseconds
    fn set_analog_period_us(&mut self, pin: u8, period_us: u32) -> Result<(), CapabilityError>;
}
