//! Motion and magnetic sensor traits

use bitbridge_protocol::Gesture;

use super::CapabilityError;

/// Sensor axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Three-axis magnetometer
pub trait Compass {
    /// Run the interactive calibration routine
    ///
    /// Blocks until the routine ends. Use [`Compass::is_calibrated`] to
    /// find out whether it succeeded.
    fn calibrate(&mut self) -> Result<(), CapabilityError>;

    /// Whether a valid calibration is held
    fn is_calibrated(&self) -> Result<bool, CapabilityError>;

    /// Forget the current calibration
    fn clear_calibration(&mut self) -> Result<(), CapabilityError>;

    /// Heading in degrees clockwise from north (0-359)
    fn heading(&mut self) -> Result<i32, CapabilityError>;

    /// Field along one axis in nano tesla
    fn field(&mut self, axis: Axis) -> Result<i32, CapabilityError>;

    /// Field magnitude in nano tesla
    fn field_strength(&mut self) -> Result<i32, CapabilityError>;
}

/// Three-axis accelerometer with gesture detection
pub trait Accelerometer {
    /// Acceleration along one axis in milli-g
    fn acceleration(&mut self, axis: Axis) -> Result<i32, CapabilityError>;

    /// The gesture being made right now, if any
    fn current_gesture(&mut self) -> Result<Option<Gesture>, CapabilityError>;

    /// Whether `gesture` happened since the last time it was asked about
    ///
    /// Asking clears the record for that gesture.
    fn was_gesture(&mut self, gesture: Gesture) -> Result<bool, CapabilityError>;
}
