//! Debounced push buttons
//!
//! [`ButtonState`] holds the debounce filter and press history and is fed
//! raw samples, so it can live behind a mutex while a periodic task does the
//! sampling. [`Button`] pairs a state with an input pin.

use bitbridge_core::traits::{ButtonId, Buttons, CapabilityError};
use bitbridge_hal::InputPin;

/// Consecutive equal samples needed to accept a level change
pub const DEBOUNCE_SAMPLES: u8 = 4;

/// Time between samples
pub const SAMPLE_INTERVAL_MS: u64 = 5;

/// Debounce filter and press history for one button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    pressed: bool,
    /// Samples disagreeing with `pressed` in a row
    streak: u8,
    presses: u32,
    latched: bool,
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            pressed: false,
            streak: 0,
            presses: 0,
            latched: false,
        }
    }

    /// Feed one raw sample; returns true on a debounced press
    pub fn sample(&mut self, pressed: bool) -> bool {
        if pressed == self.pressed {
            self.streak = 0;
            return false;
        }

        self.streak += 1;
        if self.streak < DEBOUNCE_SAMPLES {
            return false;
        }

        self.streak = 0;
        self.pressed = pressed;
        if pressed {
            self.presses = self.presses.saturating_add(1);
            self.latched = true;
        }
        pressed
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether pressed since last asked; asking clears it
    pub fn take_latch(&mut self) -> bool {
        core::mem::take(&mut self.latched)
    }

    /// Presses since last asked; asking resets the count
    pub fn take_presses(&mut self) -> u32 {
        core::mem::take(&mut self.presses)
    }
}

/// A button on an input pin
///
/// Holds only the pin and its polarity; debounce state lives wherever the
/// caller keeps its `ButtonState`.
pub struct Button<P> {
    pin: P,
    /// Pressed pulls the pin low
    active_low: bool,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button to ground with a pull-up
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Raw, undebounced level
    pub fn is_down(&self) -> bool {
        self.pin.is_high() != self.active_low
    }

    /// Sample the pin into `state`
    pub fn poll_into(&self, state: &mut ButtonState) -> bool {
        state.sample(self.is_down())
    }
}

/// Buttons A and B
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPair {
    pub a: ButtonState,
    pub b: ButtonState,
}

impl ButtonPair {
    pub const fn new() -> Self {
        Self {
            a: ButtonState::new(),
            b: ButtonState::new(),
        }
    }

    pub fn get_mut(&mut self, button: ButtonId) -> &mut ButtonState {
        match button {
            ButtonId::A => &mut self.a,
            ButtonId::B => &mut self.b,
        }
    }
}

impl Buttons for ButtonPair {
    fn is_pressed(&mut self, button: ButtonId) -> Result<bool, CapabilityError> {
        Ok(self.get_mut(button).is_pressed())
    }

    fn was_pressed(&mut self, button: ButtonId) -> Result<bool, CapabilityError> {
        Ok(self.get_mut(button).take_latch())
    }

    fn take_presses(&mut self, button: ButtonId) -> Result<u32, CapabilityError> {
        Ok(self.get_mut(button).take_presses())
    }
}
