//! Board wiring for a Raspberry Pi Pico carrier
//!
//! Gathers the RP2040 drivers into one [`Board`]. The matrix and buttons
//! live in [`crate::shared`] so the periodic tasks can reach them; the
//! handles here lock and forward.

use defmt::*;

use bitbridge_core::config::RadioConfig;
use bitbridge_core::traits::{
    Board, ButtonId, Buttons, CapabilityError, MatrixDisplay, Radio,
};
use bitbridge_drivers::Absent;
use bitbridge_hal_rp2040::{PwmTone, RpEdgePins, RpSystem};
use bitbridge_protocol::Image;

use crate::shared::{BUTTONS, MATRIX};

/// Handle to the shared LED matrix
pub struct SharedDisplay;

impl MatrixDisplay for SharedDisplay {
    fn show_char(&mut self, c: char) -> Result<(), CapabilityError> {
        MATRIX.lock(|m| m.borrow_mut().show_char(c))
    }

    fn scroll(&mut self, text: &str) -> Result<(), CapabilityError> {
        MATRIX.lock(|m| m.borrow_mut().scroll(text))
    }

    fn show_image(&mut self, image: &Image) -> Result<(), CapabilityError> {
        MATRIX.lock(|m| m.borrow_mut().show_image(image))
    }

    fn get_pixel(&self, x: u8, y: u8) -> Result<u8, CapabilityError> {
        MATRIX.lock(|m| m.borrow().get_pixel(x, y))
    }

    fn set_pixel(&mut self, x: u8, y: u8, level: u8) -> Result<(), CapabilityError> {
        MATRIX.lock(|m| m.borrow_mut().set_pixel(x, y, level))
    }

    fn clear(&mut self) -> Result<(), CapabilityError> {
        MATRIX.lock(|m| m.borrow_mut().clear())
    }

    fn set_enabled(&mut self, on: bool) -> Result<(), CapabilityError> {
        MATRIX.lock(|m| m.borrow_mut().set_enabled(on))
    }

    fn is_enabled(&self) -> bool {
        MATRIX.lock(|m| m.borrow().is_enabled())
    }

    fn read_light_level(&mut self) -> Result<u8, CapabilityError> {
        MATRIX.lock(|m| m.borrow_mut().read_light_level())
    }
}

/// Handle to the shared button state
pub struct SharedButtons;

impl Buttons for SharedButtons {
    fn is_pressed(&mut self, button: ButtonId) -> Result<bool, CapabilityError> {
        BUTTONS.lock(|b| b.borrow_mut().is_pressed(button))
    }

    fn was_pressed(&mut self, button: ButtonId) -> Result<bool, CapabilityError> {
        BUTTONS.lock(|b| b.borrow_mut().was_pressed(button))
    }

    fn take_presses(&mut self, button: ButtonId) -> Result<u32, CapabilityError> {
        BUTTONS.lock(|b| b.borrow_mut().take_presses(button))
    }
}

/// Pico carrier: matrix, two buttons, buzzer and three edge pins.
/// No radio, compass or accelerometer.
pub struct PicoBoard {
    display: SharedDisplay,
    radio: Absent,
    compass: Absent,
    accelerometer: Absent,
    tone: PwmTone<'static>,
    buttons: SharedButtons,
    pins: RpEdgePins<'static>,
    system: RpSystem<'static>,
}

impl PicoBoard {
    pub fn new(tone: PwmTone<'static>, pins: RpEdgePins<'static>, system: RpSystem<'static>) -> Self {
        Self {
            display: SharedDisplay,
            radio: Absent,
            compass: Absent,
            accelerometer: Absent,
            tone,
            buttons: SharedButtons,
            pins,
            system,
        }
    }

    /// Apply the startup radio settings, if there is a radio
    pub fn apply_radio(&mut self, config: &RadioConfig) {
        let result = self
            .radio
            .set_group(config.group)
            .and_then(|()| self.radio.set_power(config.power));

        match result {
            Ok(()) => info!("Radio group {} power {}", config.group, config.power),
            Err(CapabilityError::NotFitted) => info!("No radio fitted"),
            Err(e) => warn!("Radio setup failed: {:?}", e),
        }
    }
}

impl Board for PicoBoard {
    type Display = SharedDisplay;
    type Radio = Absent;
    type Compass = Absent;
    type Accelerometer = Absent;
    type Tone = PwmTone<'static>;
    type Buttons = SharedButtons;
    type Pins = RpEdgePins<'static>;
    type System = RpSystem<'static>;

    fn display(&mut self) -> &mut Self::Display {
        &mut self.display
    }

    fn radio(&mut self) -> &mut Self::Radio {
        &mut self.radio
    }

    fn compass(&mut self) -> &mut Self::Compass {
        &mut self.compass
    }

    fn accelerometer(&mut self) -> &mut Self::Accelerometer {
        &mut self.accelerometer
    }

    fn tone(&mut self) -> &mut Self::Tone {
        &mut self.tone
    }

    fn buttons(&mut self) -> &mut Self::Buttons {
        &mut self.buttons
    }

    fn pins(&mut self) -> &mut Self::Pins {
        &mut self.pins
    }

    fn system(&mut self) -> &mut Self::System {
        &mut self.system
    }
}
