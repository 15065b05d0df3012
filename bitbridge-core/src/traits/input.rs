//! Push button trait

use super::CapabilityError;

/// The two user buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    A,
    B,
}

/// Debounced buttons with press history
pub trait Buttons {
    /// Whether the button is held down right now
    fn is_pressed(&mut self, button: ButtonId) -> Result<bool, CapabilityError>;

    /// Whether the button was pressed since last asked; asking clears it
    fn was_pressed(&mut self, button: ButtonId) -> Result<bool, CapabilityError>;

    /// Presses since last asked; asking resets the count
    fn take_presses(&mut self, button: ButtonId) -> Result<u32, CapabilityError>;
}
