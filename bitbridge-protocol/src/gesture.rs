//! Accelerometer gesture names

use crate::payload::CoercionError;

/// Gestures an accelerometer driver can recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    Up,
    Down,
    Left,
    Right,
    FaceUp,
    FaceDown,
    Freefall,
    ThreeG,
    SixG,
    EightG,
    Shake,
}

impl Gesture {
    /// Every gesture, in wire-name order
    pub const ALL: [Gesture; 11] = [
        Gesture::Up,
        Gesture::Down,
        Gesture::Left,
        Gesture::Right,
        Gesture::FaceUp,
        Gesture::FaceDown,
        Gesture::Freefall,
        Gesture::ThreeG,
        Gesture::SixG,
        Gesture::EightG,
        Gesture::Shake,
    ];

    /// Wire name, e.g. `"face up"`
    pub fn name(self) -> &'static str {
        match self {
            Gesture::Up => "up",
            Gesture::Down => "down",
            Gesture::Left => "left",
            Gesture::Right => "right",
            Gesture::FaceUp => "face up",
            Gesture::FaceDown => "face down",
            Gesture::Freefall => "freefall",
            Gesture::ThreeG => "3g",
            Gesture::SixG => "6g",
            Gesture::EightG => "8g",
            Gesture::Shake => "shake",
        }
    }

    /// Look up a gesture by its exact wire name
    pub fn from_name(name: &str) -> Result<Self, CoercionError> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name() == name)
            .ok_or(CoercionError::UnknownGesture)
    }
}
