//! Edge connector pins
//!
//! Board pins 0, 1 and 2 sit on GPIO26, GPIO27 and GPIO28, the three
//! ADC-capable pads. Each call borrows the pad just long enough to
//! configure it, so a pin can switch between digital and analog use
//! from one request to the next.

use core::cell::RefCell;

use bitbridge_core::traits::{CapabilityError, EdgePins, ANALOG_MAX};
use embassy_rp::adc::{self, Adc, Blocking};
use embassy_rp::gpio::{Flex, Level, Pull};
use embassy_rp::peripherals::{PIN_26, PIN_27, PIN_28};
use embassy_rp::Peri;

/// Number of edge pins wired on this board
pub const EDGE_PIN_COUNT: u8 = 3;

/// Run `$body` with the pad for board pin `$pin` bound to `$p`
macro_rules! with_pad {
    ($self:ident, $pin:expr, |$p:ident| $body:expr) => {
        match $pin {
            0 => {
                let $p = $self.pin0.reborrow();
                $body
            }
            1 => {
                let $p = $self.pin1.reborrow();
                $body
            }
            2 => {
                let $p = $self.pin2.reborrow();
                $body
            }
            _ => Err(CapabilityError::NotFitted),
        }
    };
}

pub struct RpEdgePins<'d> {
    pin0: Peri<'d, PIN_26>,
    pin1: Peri<'d, PIN_27>,
    pin2: Peri<'d, PIN_28>,
    adc: &'d RefCell<Adc<'d, Blocking>>,
}

impl<'d> RpEdgePins<'d> {
    pub fn new(
        pin0: Peri<'d, PIN_26>,
        pin1: Peri<'d, PIN_27>,
        pin2: Peri<'d, PIN_28>,
        adc: &'d RefCell<Adc<'d, Blocking>>,
    ) -> Self {
        Self {
            pin0,
            pin1,
            pin2,
            adc,
        }
    }
}

impl EdgePins for RpEdgePins<'_> {
    fn read_digital(&mut self, pin: u8) -> Result<u8, CapabilityError> {
        with_pad!(self, pin, |p| {
            let mut pad = Flex::new(p);
            pad.set_as_input();
            pad.set_pull(Pull::None);
            Ok(pad.is_high() as u8)
        })
    }

    fn write_digital(&mut self, pin: u8, high: bool) -> Result<(), CapabilityError> {
        with_pad!(self, pin, |p| {
            let mut pad = Flex::new(p);
            pad.set_level(Level::from(high));
            pad.set_as_output();
            // Dropping a Flex disconnects the pad; the level must outlive this call
            core::mem::forget(pad);
            Ok(())
        })
    }

    fn read_analog(&mut self, pin: u8) -> Result<u16, CapabilityError> {
        with_pad!(self, pin, |p| {
            let mut channel = adc::Channel::new_pin(p, Pull::None);
            let mut adc = self
                .adc
                .try_borrow_mut()
                .map_err(|_| CapabilityError::Hardware)?;
            let raw = adc
                .blocking_read(&mut channel)
                .map_err(|_| CapabilityError::Hardware)?;
            Ok(scale_adc(raw))
        })
    }

    fn write_analog(&mut self, pin: u8, _duty: u16) -> Result<(), CapabilityError> {
        Err(no_pwm(pin))
    }

    fn set_analog_period_us(&mut self, pin: u8, _period_us: u32) -> Result<(), CapabilityError> {
        Err(no_pwm(pin))
    }
}

/// Edge pins are wired to ADC pads, not PWM outputs
fn no_pwm(pin: u8) -> CapabilityError {
    if pin < EDGE_PIN_COUNT {
        CapabilityError::Unsupported
    } else {
        CapabilityError::NotFitted
    }
}

/// Map a 12-bit ADC sample onto the 0-1023 analog range
pub fn scale_adc(raw: u16) -> u16 {
    (raw >> 2).min(ANALOG_MAX)
}
