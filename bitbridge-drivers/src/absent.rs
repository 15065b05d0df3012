//! Stand-in for hardware a board does not have
//!
//! Every operation fails with `NotFitted`, which the host sees as an
//! ordinary command failure.

use bitbridge_core::traits::{
    Accelerometer, Axis, CapabilityError, Compass, EdgePins, MatrixDisplay, Packet, Radio,
    ToneGenerator,
};
use bitbridge_protocol::{Gesture, Image};

/// A peripheral that is not there
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Absent;

const NOT_FITTED: CapabilityError = CapabilityError::NotFitted;

impl Radio for Absent {
    fn enable(&mut self) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn disable(&mut self) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn set_group(&mut self, _group: u8) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn set_power(&mut self, _power: u8) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn send(&mut self, _message: &str) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn receive(&mut self) -> Result<Option<Packet>, CapabilityError> {
        Err(NOT_FITTED)
    }
}

impl Compass for Absent {
    fn calibrate(&mut self) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn is_calibrated(&self) -> Result<bool, CapabilityError> {
        Err(NOT_FITTED)
    }

    fn clear_calibration(&mut self) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn heading(&mut self) -> Result<i32, CapabilityError> {
        Err(NOT_FITTED)
    }

    fn field(&mut self, _axis: Axis) -> Result<i32, CapabilityError> {
        Err(NOT_FITTED)
    }

    fn field_strength(&mut self) -> Result<i32, CapabilityError> {
        Err(NOT_FITTED)
    }
}

impl Accelerometer for Absent {
    fn acceleration(&mut self, _axis: Axis) -> Result<i32, CapabilityError> {
        Err(NOT_FITTED)
    }

    fn current_gesture(&mut self) -> Result<Option<Gesture>, CapabilityError> {
        Err(NOT_FITTED)
    }

    fn was_gesture(&mut self, _gesture: Gesture) -> Result<bool, CapabilityError> {
        Err(NOT_FITTED)
    }
}

impl ToneGenerator for Absent {
    fn pitch(&mut self, _frequency: u32) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn stop(&mut self) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }
}

impl EdgePins for Absent {
    fn read_digital(&mut self, _pin: u8) -> Result<u8, CapabilityError> {
        Err(NOT_FITTED)
    }

    fn write_digital(&mut self, _pin: u8, _high: bool) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn read_analog(&mut self, _pin: u8) -> Result<u16, CapabilityError> {
        Err(NOT_FITTED)
    }

    fn write_analog(&mut self, _pin: u8, _duty: u16) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn set_analog_period_us(&mut self, _pin: u8, _period_us: u32) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }
}

impl MatrixDisplay for Absent {
    fn show_char(&mut self, _c: char) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn scroll(&mut self, _text: &str) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn show_image(&mut self, _image: &Image) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn get_pixel(&self, _x: u8, _y: u8) -> Result<u8, CapabilityError> {
        Err(NOT_FITTED)
    }

    fn set_pixel(&mut self, _x: u8, _y: u8, _level: u8) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn clear(&mut self) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn set_enabled(&mut self, _on: bool) -> Result<(), CapabilityError> {
        Err(NOT_FITTED)
    }

    fn is_enabled(&self) -> bool {
        false
    }

    fn read_light_level(&mut self) -> Result<u8, CapabilityError> {
        Err(NOT_FITTED)
    }
}
