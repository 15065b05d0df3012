//! Command dispatch
//!
//! The dispatcher owns the board and the registry and turns one typed
//! [`Command`] into one [`Reply`]. It never sees bytes; framing and response
//! encoding belong to the bridge.

mod error;
mod value;

pub use error::{CommandError, ErrorKind};
pub use value::Value;

use bitbridge_protocol::Command;

use crate::registry::{Object, Registry};
use crate::traits::{Accelerometer, Board, Compass, DisplayExt, MatrixDisplay, Radio, ToneGenerator};

/// Text answered to a ping
pub const PING_REPLY: &str = "3";

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Result text plus the success marker
    Value(Value),
    /// No bytes at all
    Silent,
}

/// Runs commands against a board
pub struct Dispatcher<B: Board> {
    board: B,
    registry: Registry,
}

impl<B: Board> Dispatcher<B> {
    pub fn new(board: B, registry: Registry) -> Self {
        Self { board, registry }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute one command
    pub fn execute(&mut self, command: &Command<'_>) -> Result<Reply, CommandError> {
        let board = &mut self.board;

        let value = match command {
            Command::Ping => Value::text(PING_REPLY)?,

            Command::CallGlobal { name } => self
                .registry
                .global(name)
                .ok_or(CommandError::UnknownCapability)?
                .call(board)?,

            Command::CallAttr { target } => {
                let object = Object::from_name(target.object).ok_or(CommandError::UnknownCapability)?;
                self.registry
                    .attribute(object, target.attr)
                    .ok_or(CommandError::UnknownCapability)?
                    .call(board)?
            }

            Command::CallAttrArg { target, arg } => {
                let object = Object::from_name(target.object).ok_or(CommandError::UnknownCapability)?;
                self.registry
                    .attribute_with_arg(object, target.attr)
                    .ok_or(CommandError::UnknownCapability)?
                    .call(board, *arg)?
            }

            Command::ShowText(text) => {
                board.display().show_text(text)?;
                Value::Unit
            }

            Command::ShowImage(image) => {
                board.display().show_image(image)?;
                Value::Unit
            }

            Command::GetPixel { x, y } => Value::from(board.display().get_pixel(*x, *y)?),

            Command::SetPixel { x, y, level } => {
                board.display().set_pixel(*x, *y, *level)?;
                Value::Unit
            }

            Command::CalibrateCompass => {
                let compass = board.compass();
                compass.calibrate()?;
                Value::from(compass.is_calibrated()?)
            }

            Command::WasGesture(gesture) => {
                Value::from(board.accelerometer().was_gesture(*gesture)?)
            }

            Command::RadioGroup(group) => {
                board.radio().set_group(*group)?;
                Value::Unit
            }

            Command::RadioPower(power) => {
                board.radio().set_power(*power)?;
                Value::Unit
            }

            Command::RadioSend(message) => {
                board.radio().send(message)?;
                Value::Unit
            }

            Command::RadioReceive => match board.radio().receive()? {
                Some(packet) => Value::text(&packet)?,
                None => return Ok(Reply::Silent),
            },

            Command::PlayTone(frequency) => {
                board.tone().pitch(*frequency)?;
                Value::Unit
            }

            Command::Unknown(_) => Value::Unit,
        };

        Ok(Reply::Value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dispatcher, MockBoard};
    use crate::traits::{ButtonId, CapabilityError};
    use bitbridge_protocol::{CoercionError, Gesture, Image, Target};

    fn run(d: &mut Dispatcher<MockBoard>, command: Command<'_>) -> Result<Reply, CommandError> {
        d.execute(&command)
    }

    fn text(reply: Result<Reply, CommandError>) -> std::string::String {
        match reply {
            Ok(Reply::Value(v)) => v.to_string(),
            other => panic!("expected a value, got {:?}", other),
        }
    }

    #[test]
    fn test_ping() {
        let mut d = dispatcher();
        assert_eq!(text(run(&mut d, Command::Ping)), "3");
    }

    #[test]
    fn test_unknown_opcode_is_plain_success() {
        let mut d = dispatcher();
        assert_eq!(run(&mut d, Command::Unknown(0xFF)), Ok(Reply::Value(Value::Unit)));
    }

    #[test]
    fn test_globals() {
        let mut d = dispatcher();
        d.board_mut().system.temperature = 21;
        d.board_mut().system.uptime_ms = 1234;
        assert_eq!(text(run(&mut d, Command::CallGlobal { name: "temperature" })), "21");
        assert_eq!(text(run(&mut d, Command::CallGlobal { name: "running_time" })), "1234");
    }

    #[test]
    fn test_unknown_global() {
        let mut d = dispatcher();
        assert_eq!(
            run(&mut d, Command::CallGlobal { name: "reset" }),
            Err(CommandError::UnknownCapability)
        );
        assert_eq!(
            run(&mut d, Command::CallGlobal { name: "" }),
            Err(CommandError::UnknownCapability)
        );
    }

    #[test]
    fn test_attribute_call() {
        let mut d = dispatcher();
        d.board_mut().display.light_level = 42;
        let target = Target { object: "display", attr: "read_light_level" };
        assert_eq!(text(run(&mut d, Command::CallAttr { target })), "42");
    }

    #[test]
    fn test_unknown_object_or_attribute() {
        let mut d = dispatcher();
        for (object, attr) in [("os", "system"), ("display", "scroll"), ("pin9", "read_digital")] {
            let target = Target { object, attr };
            assert_eq!(
                run(&mut d, Command::CallAttr { target }),
                Err(CommandError::UnknownCapability)
            );
        }
    }

    #[test]
    fn test_wrong_arity_is_unknown() {
        let mut d = dispatcher();
        let target = Target { object: "pin0", attr: "read_digital" };
        assert_eq!(
            run(&mut d, Command::CallAttrArg { target, arg: 1 }),
            Err(CommandError::UnknownCapability)
        );
    }

    #[test]
    fn test_write_digital() {
        let mut d = dispatcher();
        let target = Target { object: "pin1", attr: "write_digital" };
        assert_eq!(text(run(&mut d, Command::CallAttrArg { target, arg: 1 })), "");
        assert_eq!(d.board().pins.digital[1], 1);

        assert_eq!(
            run(&mut d, Command::CallAttrArg { target, arg: 2 }),
            Err(CommandError::Capability(CapabilityError::InvalidArgument))
        );
    }

    #[test]
    fn test_write_analog_range() {
        let mut d = dispatcher();
        let target = Target { object: "pin2", attr: "write_analog" };
        assert!(run(&mut d, Command::CallAttrArg { target, arg: 1023 }).is_ok());
        assert_eq!(d.board().pins.analog[2], 1023);
        assert!(run(&mut d, Command::CallAttrArg { target, arg: 1024 }).is_err());
        assert!(run(&mut d, Command::CallAttrArg { target, arg: -1 }).is_err());
    }

    #[test]
    fn test_analog_period_units() {
        let mut d = dispatcher();
        let ms = Target { object: "pin0", attr: "set_analog_period" };
        run(&mut d, Command::CallAttrArg { target: ms, arg: 20 }).unwrap();
        assert_eq!(d.board().pins.period_us[0], 20_000);

        let us = Target { object: "pin0", attr: "set_analog_period_microseconds" };
        run(&mut d, Command::CallAttrArg { target: us, arg: 500 }).unwrap();
        assert_eq!(d.board().pins.period_us[0], 500);

        assert!(run(&mut d, Command::CallAttrArg { target: us, arg: 0 }).is_err());
    }

    #[test]
    fn test_button_presses_reset_when_read() {
        let mut d = dispatcher();
        d.board_mut().buttons.presses[0] = 3;
        let target = Target { object: "button_a", attr: "get_presses" };
        assert_eq!(text(run(&mut d, Command::CallAttr { target })), "3");
        assert_eq!(text(run(&mut d, Command::CallAttr { target })), "0");
        assert_eq!(d.board_mut().buttons.presses[ButtonId::B as usize], 0);
    }

    #[test]
    fn test_show_text_single_char_is_a_glyph() {
        let mut d = dispatcher();
        assert_eq!(text(run(&mut d, Command::ShowText("A"))), "");
        assert_eq!(d.board().display.glyph, Some('A'));
        assert!(d.board().display.scrolled.is_empty());
    }

    #[test]
    fn test_show_text_longer_scrolls() {
        let mut d = dispatcher();
        run(&mut d, Command::ShowText("Hi")).unwrap();
        run(&mut d, Command::ShowText("")).unwrap();
        assert_eq!(d.board().display.scrolled, ["Hi", ""]);
        assert_eq!(d.board().display.glyph, None);
    }

    #[test]
    fn test_pixels() {
        let mut d = dispatcher();
        run(&mut d, Command::SetPixel { x: 1, y: 1, level: 9 }).unwrap();
        assert_eq!(text(run(&mut d, Command::GetPixel { x: 1, y: 1 })), "9");
        assert_eq!(text(run(&mut d, Command::GetPixel { x: 0, y: 0 })), "0");
    }

    #[test]
    fn test_pixel_outside_display() {
        let mut d = dispatcher();
        assert_eq!(
            run(&mut d, Command::GetPixel { x: 5, y: 0 }),
            Err(CommandError::Capability(CapabilityError::InvalidArgument))
        );
    }

    #[test]
    fn test_show_image() {
        let mut d = dispatcher();
        let image = Image::parse("09090:99999").unwrap();
        run(&mut d, Command::ShowImage(image)).unwrap();
        assert_eq!(text(run(&mut d, Command::GetPixel { x: 1, y: 0 })), "9");
        assert_eq!(text(run(&mut d, Command::GetPixel { x: 0, y: 4 })), "0");
    }

    #[test]
    fn test_calibrate_compass() {
        let mut d = dispatcher();
        assert_eq!(text(run(&mut d, Command::CalibrateCompass)), "1");
        d.board_mut().compass.calibration_succeeds = false;
        assert_eq!(text(run(&mut d, Command::CalibrateCompass)), "0");
    }

    #[test]
    fn test_was_gesture() {
        let mut d = dispatcher();
        d.board_mut().accelerometer.seen.push(Gesture::Shake);
        assert_eq!(text(run(&mut d, Command::WasGesture(Gesture::Shake))), "1");
        assert_eq!(text(run(&mut d, Command::WasGesture(Gesture::Shake))), "0");
    }

    #[test]
    fn test_radio_settings_reach_the_radio() {
        let mut d = dispatcher();
        run(&mut d, Command::RadioGroup(7)).unwrap();
        run(&mut d, Command::RadioPower(3)).unwrap();
        run(&mut d, Command::RadioSend("hello")).unwrap();
        let radio = &d.board().radio;
        assert_eq!(radio.group, 7);
        assert_eq!(radio.power, 3);
        assert_eq!(radio.sent, ["hello"]);
    }

    #[test]
    fn test_radio_receive() {
        let mut d = dispatcher();
        assert_eq!(run(&mut d, Command::RadioReceive), Ok(Reply::Silent));
        d.board_mut().radio.inbox.push_back("pong".into());
        assert_eq!(text(run(&mut d, Command::RadioReceive)), "pong");
        assert_eq!(run(&mut d, Command::RadioReceive), Ok(Reply::Silent));
    }

    #[test]
    fn test_tone() {
        let mut d = dispatcher();
        run(&mut d, Command::PlayTone(440)).unwrap();
        assert_eq!(d.board().tone.frequency, 440);
        let target = Target { object: "music", attr: "stop" };
        run(&mut d, Command::CallAttr { target }).unwrap();
        assert_eq!(d.board().tone.frequency, 0);
    }

    #[test]
    fn test_missing_hardware() {
        let mut d = dispatcher();
        d.board_mut().radio.fitted = false;
        assert_eq!(
            run(&mut d, Command::RadioSend("x")),
            Err(CommandError::Capability(CapabilityError::NotFitted))
        );
    }

    #[test]
    fn test_current_gesture() {
        let mut d = dispatcher();
        let target = Target { object: "accelerometer", attr: "current_gesture" };
        assert_eq!(text(run(&mut d, Command::CallAttr { target })), "");
        d.board_mut().accelerometer.current = Some(Gesture::FaceUp);
        assert_eq!(text(run(&mut d, Command::CallAttr { target })), "face up");
    }

    #[test]
    fn test_coercion_errors_convert() {
        let e: CommandError = CoercionError::OutOfRange.into();
        assert_eq!(e.kind(), ErrorKind::Coercion);
    }
}
