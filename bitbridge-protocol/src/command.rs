//! Typed commands
//!
//! A [`Command`] is what a request means once its payload has been split
//! and coerced. Parsing never touches hardware, so every payload problem is
//! caught here before a capability is called.

use crate::gesture::Gesture;
use crate::image::{Image, MAX_BRIGHTNESS};
use crate::opcode::Opcode;
use crate::payload::{field, int_field, parse_bounded, CoercionError, Target, FIELD_SEPARATOR};

/// Highest radio transmit power level
pub const MAX_RADIO_POWER: u8 = 7;

/// A decoded request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Liveness probe
    Ping,
    /// Zero-argument global function
    CallGlobal { name: &'a str },
    /// Zero-argument attribute function
    CallAttr { target: Target<'a> },
    /// One-argument attribute function
    CallAttrArg { target: Target<'a>, arg: i32 },
    /// Show one glyph, or scroll anything longer (or empty)
    ShowText(&'a str),
    /// Show an image
    ShowImage(Image),
    /// Read pixel brightness
    GetPixel { x: u8, y: u8 },
    /// Write pixel brightness
    SetPixel { x: u8, y: u8, level: u8 },
    /// Run compass calibration and report whether it took
    CalibrateCompass,
    /// Test whether a gesture happened since the last test
    WasGesture(Gesture),
    /// Set radio group (0-255)
    RadioGroup(u8),
    /// Set radio transmit power (0-7)
    RadioPower(u8),
    /// Transmit a packet
    RadioSend(&'a str),
    /// Poll for a received packet
    RadioReceive,
    /// Start a tone at the given frequency in Hz
    PlayTone(u32),
    /// Opcode outside the recognized set
    Unknown(u8),
}

impl<'a> Command<'a> {
    /// Build a command from an opcode byte and its decoded payload
    pub fn parse(opcode: u8, payload: &'a str) -> Result<Self, CoercionError> {
        let Some(op) = Opcode::from_byte(opcode) else {
            return Ok(Command::Unknown(opcode));
        };

        match op {
            Opcode::Ping => Ok(Command::Ping),
            Opcode::CallGlobal => Ok(Command::CallGlobal { name: payload }),
            Opcode::CallAttr => Ok(Command::CallAttr {
                target: Target::parse(payload)?,
            }),
            Opcode::CallAttrArg => {
                let target = Target::parse(field(payload, FIELD_SEPARATOR, 0)?)?;
                let arg = int_field(payload, 1)?;
                Ok(Command::CallAttrArg { target, arg })
            }
            Opcode::ShowText => Ok(Command::ShowText(payload)),
            Opcode::ShowImage => Ok(Command::ShowImage(Image::parse(payload)?)),
            Opcode::GetPixel => Ok(Command::GetPixel {
                x: coordinate(payload, 0)?,
                y: coordinate(payload, 1)?,
            }),
            Opcode::SetPixel => Ok(Command::SetPixel {
                x: coordinate(payload, 0)?,
                y: coordinate(payload, 1)?,
                level: bounded_field(payload, 2, 0, MAX_BRIGHTNESS as i32)? as u8,
            }),
            Opcode::CalibrateCompass => Ok(Command::CalibrateCompass),
            Opcode::WasGesture => Ok(Command::WasGesture(Gesture::from_name(payload)?)),
            Opcode::RadioGroup => Ok(Command::RadioGroup(
                parse_bounded(payload, 0, u8::MAX as i32)? as u8,
            )),
            Opcode::RadioPower => Ok(Command::RadioPower(
                parse_bounded(payload, 0, MAX_RADIO_POWER as i32)? as u8,
            )),
            Opcode::RadioSend => Ok(Command::RadioSend(payload)),
            Opcode::RadioReceive => Ok(Command::RadioReceive),
            Opcode::PlayTone => Ok(Command::PlayTone(
                parse_bounded(payload, 0, i32::MAX)? as u32,
            )),
        }
    }

    /// The opcode byte this command was read from
    pub fn opcode(&self) -> u8 {
        match self {
            Command::Ping => Opcode::Ping.to_byte(),
            Command::CallGlobal { .. } => Opcode::CallGlobal.to_byte(),
            Command::CallAttr { .. } => Opcode::CallAttr.to_byte(),
            Command::CallAttrArg { .. } => Opcode::CallAttrArg.to_byte(),
            Command::ShowText(_) => Opcode::ShowText.to_byte(),
            Command::ShowImage(_) => Opcode::ShowImage.to_byte(),
            Command::GetPixel { .. } => Opcode::GetPixel.to_byte(),
            Command::SetPixel { .. } => Opcode::SetPixel.to_byte(),
            Command::CalibrateCompass => Opcode::CalibrateCompass.to_byte(),
            Command::WasGesture(_) => Opcode::WasGesture.to_byte(),
            Command::RadioGroup(_) => Opcode::RadioGroup.to_byte(),
            Command::RadioPower(_) => Opcode::RadioPower.to_byte(),
            Command::RadioSend(_) => Opcode::RadioSend.to_byte(),
            Command::RadioReceive => Opcode::RadioReceive.to_byte(),
            Command::PlayTone(_) => Opcode::PlayTone.to_byte(),
            Command::Unknown(byte) => *byte,
        }
    }
}

fn bounded_field(payload: &str, index: usize, min: i32, max: i32) -> Result<i32, CoercionError> {
    parse_bounded(field(payload, FIELD_SEPARATOR, index)?, min, max)
}

/// Pixel coordinates must be non-negative; the display checks the upper bound
fn coordinate(payload: &str, index: usize) -> Result<u8, CoercionError> {
    Ok(bounded_field(payload, index, 0, u8::MAX as i32)? as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_ignores_payload() {
        assert_eq!(Command::parse(0x10, "anything"), Ok(Command::Ping));
    }

    #[test]
    fn test_unknown_opcode() {
        assert_eq!(Command::parse(0xFF, ""), Ok(Command::Unknown(0xFF)));
        assert_eq!(Command::parse(0x22, "1,1"), Ok(Command::Unknown(0x22)));
    }

    #[test]
    fn test_call_global() {
        assert_eq!(
            Command::parse(0x11, "temperature"),
            Ok(Command::CallGlobal { name: "temperature" })
        );
    }

    #[test]
    fn test_call_attr() {
        let cmd = Command::parse(0x12, "display.read_light_level").unwrap();
        assert_eq!(
            cmd,
            Command::CallAttr {
                target: Target {
                    object: "display",
                    attr: "read_light_level"
                }
            }
        );
    }

    #[test]
    fn test_call_attr_without_dot_is_rejected() {
        assert_eq!(Command::parse(0x12, "display"), Err(CoercionError::MissingField));
    }

    #[test]
    fn test_call_attr_arg() {
        let cmd = Command::parse(0x13, "pin0.write_digital,1").unwrap();
        assert_eq!(
            cmd,
            Command::CallAttrArg {
                target: Target {
                    object: "pin0",
                    attr: "write_digital"
                },
                arg: 1
            }
        );
    }

    #[test]
    fn test_call_attr_arg_needs_integer() {
        assert_eq!(
            Command::parse(0x13, "pin0.write_digital,on"),
            Err(CoercionError::NotAnInteger)
        );
        assert_eq!(
            Command::parse(0x13, "pin0.write_digital"),
            Err(CoercionError::MissingField)
        );
    }

    #[test]
    fn test_show_text_keeps_raw_payload() {
        assert_eq!(Command::parse(0x20, "A,B.C"), Ok(Command::ShowText("A,B.C")));
    }

    #[test]
    fn test_show_image() {
        let cmd = Command::parse(0x21, "90000:00000:00000:00000:00009").unwrap();
        match cmd {
            Command::ShowImage(image) => {
                assert_eq!(image.pixel(0, 0), 9);
                assert_eq!(image.pixel(4, 4), 9);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(Command::parse(0x21, "HEART"), Err(CoercionError::InvalidImage));
    }

    #[test]
    fn test_pixels() {
        assert_eq!(Command::parse(0x23, "1,2"), Ok(Command::GetPixel { x: 1, y: 2 }));
        assert_eq!(
            Command::parse(0x24, "3,4,9"),
            Ok(Command::SetPixel { x: 3, y: 4, level: 9 })
        );
    }

    #[test]
    fn test_pixel_coercion_failures() {
        assert_eq!(Command::parse(0x23, "1"), Err(CoercionError::MissingField));
        assert_eq!(Command::parse(0x23, "a,b"), Err(CoercionError::NotAnInteger));
        assert_eq!(Command::parse(0x23, "-1,0"), Err(CoercionError::OutOfRange));
        assert_eq!(Command::parse(0x24, "0,0,10"), Err(CoercionError::OutOfRange));
        assert_eq!(Command::parse(0x24, "0,0"), Err(CoercionError::MissingField));
    }

    #[test]
    fn test_gesture() {
        assert_eq!(
            Command::parse(0x41, "face up"),
            Ok(Command::WasGesture(Gesture::FaceUp))
        );
        assert_eq!(Command::parse(0x41, "wiggle"), Err(CoercionError::UnknownGesture));
    }

    #[test]
    fn test_radio_settings() {
        assert_eq!(Command::parse(0x50, "7"), Ok(Command::RadioGroup(7)));
        assert_eq!(Command::parse(0x50, "256"), Err(CoercionError::OutOfRange));
        assert_eq!(Command::parse(0x51, "7"), Ok(Command::RadioPower(7)));
        assert_eq!(Command::parse(0x51, "8"), Err(CoercionError::OutOfRange));
        assert_eq!(Command::parse(0x51, "max"), Err(CoercionError::NotAnInteger));
    }

    #[test]
    fn test_radio_send_and_receive() {
        assert_eq!(Command::parse(0x52, "hi, there"), Ok(Command::RadioSend("hi, there")));
        assert_eq!(Command::parse(0x53, ""), Ok(Command::RadioReceive));
    }

    #[test]
    fn test_play_tone() {
        assert_eq!(Command::parse(0x60, "440"), Ok(Command::PlayTone(440)));
        assert_eq!(Command::parse(0x60, "-440"), Err(CoercionError::OutOfRange));
    }

    #[test]
    fn test_opcode_matches_parse_input() {
        let cases: [(u8, &str); 6] = [
            (0x10, ""),
            (0x12, "radio.on"),
            (0x24, "0,0,0"),
            (0x37, ""),
            (0x60, "0"),
            (0x99, ""),
        ];
        for (opcode, payload) in cases {
            assert_eq!(Command::parse(opcode, payload).unwrap().opcode(), opcode);
        }
    }
}
