//! Capability traits
//!
//! Every hardware feature the bridge can reach is behind one of these traits.
//! A board gathers one implementation of each into a [`Board`]; features the
//! board does not have answer [`CapabilityError::NotFitted`].

pub mod audio;
pub mod board;
pub mod display;
pub mod input;
pub mod pins;
pub mod radio;
pub mod sensor;
pub mod system;

pub use audio::ToneGenerator;
pub use board::Board;
pub use display::{DisplayExt, MatrixDisplay, DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use input::{ButtonId, Buttons};
pub use pins::{EdgePins, ANALOG_MAX};
pub use radio::{Packet, Radio, MAX_PACKET_LEN};
pub use sensor::{Accelerometer, Axis, Compass};
pub use system::SystemInfo;

/// Errors a capability can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CapabilityError {
    /// The board has no such hardware
    NotFitted,
    /// Argument outside what the hardware accepts
    InvalidArgument,
    /// The hardware did not respond or reported a fault
    Hardware,
    /// Hardware present but this operation is not wired up
    Unsupported,
}
