//! What a registry entry does when called

use crate::dispatch::Value;
use crate::traits::{
    Accelerometer, Axis, Board, ButtonId, Buttons, CapabilityError, Compass, EdgePins,
    MatrixDisplay, Radio, SystemInfo, ToneGenerator, ANALOG_MAX,
};

/// Number of arguments a call takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arity {
    Zero,
    One,
}

/// Zero-argument calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Nullary {
    RunningTime,
    Temperature,
    DisplayOn,
    DisplayOff,
    DisplayIsOn,
    DisplayClear,
    ReadLightLevel,
    IsPressed(ButtonId),
    WasPressed(ButtonId),
    GetPresses(ButtonId),
    ReadDigital(u8),
    ReadAnalog(u8),
    Calibrate,
    IsCalibrated,
    ClearCalibration,
    Heading,
    MagneticField(Axis),
    FieldStrength,
    Acceleration(Axis),
    CurrentGesture,
    RadioOn,
    RadioOff,
    MusicStop,
}

/// One-integer-argument calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unary {
    WriteDigital(u8),
    WriteAnalog(u8),
    /// Period in milliseconds
    SetAnalogPeriod(u8),
    /// Period in microseconds
    SetAnalogPeriodMicros(u8),
}

/// Either kind of call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Invocable {
    Nullary(Nullary),
    Unary(Unary),
}

impl Invocable {
    pub fn arity(&self) -> Arity {
        match self {
            Invocable::Nullary(_) => Arity::Zero,
            Invocable::Unary(_) => Arity::One,
        }
    }
}

impl Nullary {
    /// Run the call against a board
    pub fn call<B: Board + ?Sized>(self, board: &mut B) -> Result<Value, CapabilityError> {
        match self {
            Nullary::RunningTime => {
                let ms = board.system().running_time_ms();
                Ok(Value::Int(i64::try_from(ms).unwrap_or(i64::MAX)))
            }
            Nullary::Temperature => board.system().temperature().map(Value::from),
            Nullary::DisplayOn => unit(board.display().set_enabled(true)),
            Nullary::DisplayOff => unit(board.display().set_enabled(false)),
            Nullary::DisplayIsOn => Ok(Value::from(board.display().is_enabled())),
            Nullary::DisplayClear => unit(board.display().clear()),
            Nullary::ReadLightLevel => board.display().read_light_level().map(Value::from),
            Nullary::IsPressed(b) => board.buttons().is_pressed(b).map(Value::from),
            Nullary::WasPressed(b) => board.buttons().was_pressed(b).map(Value::from),
            Nullary::GetPresses(b) => board.buttons().take_presses(b).map(Value::from),
            Nullary::ReadDigital(pin) => board.pins().read_digital(pin).map(Value::from),
            Nullary::ReadAnalog(pin) => board.pins().read_analog(pin).map(Value::from),
            Nullary::Calibrate => unit(board.compass().calibrate()),
            Nullary::IsCalibrated => board.compass().is_calibrated().map(Value::from),
            Nullary::ClearCalibration => unit(board.compass().clear_calibration()),
            Nullary::Heading => board.compass().heading().map(Value::from),
            Nullary::MagneticField(axis) => board.compass().field(axis).map(Value::from),
            Nullary::FieldStrength => board.compass().field_strength().map(Value::from),
            Nullary::Acceleration(axis) => {
                board.accelerometer().acceleration(axis).map(Value::from)
            }
            Nullary::CurrentGesture => match board.accelerometer().current_gesture()? {
                Some(gesture) => Value::text(gesture.name()),
                None => Ok(Value::Unit),
            },
            Nullary::RadioOn => unit(board.radio().enable()),
            Nullary::RadioOff => unit(board.radio().disable()),
            Nullary::MusicStop => unit(board.tone().stop()),
        }
    }
}

impl Unary {
    /// Run the call against a board
    ///
    /// The argument is range-checked here, before the hardware sees it.
    pub fn call<B: Board + ?Sized>(self, board: &mut B, arg: i32) -> Result<Value, CapabilityError> {
        match self {
            Unary::WriteDigital(pin) => {
                let high = match arg {
                    0 => false,
                    1 => true,
                    _ => return Err(CapabilityError::InvalidArgument),
                };
                unit(board.pins().write_digital(pin, high))
            }
            Unary::WriteAnalog(pin) => {
                let duty = u16::try_from(arg)
                    .ok()
                    .filter(|d| *d <= ANALOG_MAX)
                    .ok_or(CapabilityError::InvalidArgument)?;
                unit(board.pins().write_analog(pin, duty))
            }
            Unary::SetAnalogPeriod(pin) => {
                let period_us = positive(arg)?
                    .checked_mul(1000)
                    .ok_or(CapabilityError::InvalidArgument)?;
                unit(board.pins().set_analog_period_us(pin, period_us))
            }
            Unary::SetAnalogPeriodMicros(pin) => {
                unit(board.pins().set_analog_period_us(pin, positive(arg)?))
            }
        }
    }
}

fn unit(result: Result<(), CapabilityError>) -> Result<Value, CapabilityError> {
    result.map(|()| Value::Unit)
}

fn positive(arg: i32) -> Result<u32, CapabilityError> {
    u32::try_from(arg)
        .ok()
        .filter(|n| *n > 0)
        .ok_or(CapabilityError::InvalidArgument)
}
