//! In-memory board and serial link for unit tests

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use bitbridge_hal::{UartRx, UartTx};
use bitbridge_protocol::{Gesture, Image, MAX_BRIGHTNESS};

use crate::dispatch::Dispatcher;
use crate::registry::Registry;
use crate::traits::{
    Accelerometer, Axis, Board, ButtonId, Buttons, CapabilityError, Compass, EdgePins,
    MatrixDisplay, Packet, Radio, SystemInfo, ToneGenerator, DISPLAY_HEIGHT, DISPLAY_WIDTH,
};

const PINS: usize = 21;

#[derive(Debug, Default)]
pub struct MockDisplay {
    pub pixels: [[u8; 5]; 5],
    pub enabled: bool,
    pub glyph: Option<char>,
    pub scrolled: Vec<String>,
    pub light_level: u8,
}

impl MockDisplay {
    fn check(x: u8, y: u8) -> Result<(), CapabilityError> {
        if x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT {
            Ok(())
        } else {
            Err(CapabilityError::InvalidArgument)
        }
    }
}

impl MatrixDisplay for MockDisplay {
    fn show_char(&mut self, c: char) -> Result<(), CapabilityError> {
        self.glyph = Some(c);
        Ok(())
    }

    fn scroll(&mut self, text: &str) -> Result<(), CapabilityError> {
        self.glyph = None;
        self.scrolled.push(text.into());
        Ok(())
    }

    fn show_image(&mut self, image: &Image) -> Result<(), CapabilityError> {
        self.glyph = None;
        for y in 0..DISPLAY_HEIGHT {
            for x in 0..DISPLAY_WIDTH {
                self.pixels[y as usize][x as usize] = image.pixel(x, y);
            }
        }
        Ok(())
    }

    fn get_pixel(&self, x: u8, y: u8) -> Result<u8, CapabilityError> {
        Self::check(x, y)?;
        Ok(self.pixels[y as usize][x as usize])
    }

    fn set_pixel(&mut self, x: u8, y: u8, level: u8) -> Result<(), CapabilityError> {
        Self::check(x, y)?;
        if level > MAX_BRIGHTNESS {
            return Err(CapabilityError::InvalidArgument);
        }
        self.pixels[y as usize][x as usize] = level;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CapabilityError> {
        self.pixels = [[0; 5]; 5];
        self.glyph = None;
        Ok(())
    }

    fn set_enabled(&mut self, on: bool) -> Result<(), CapabilityError> {
        self.enabled = on;
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn read_light_level(&mut self) -> Result<u8, CapabilityError> {
        Ok(self.light_level)
    }
}

#[derive(Debug)]
pub struct MockRadio {
    pub fitted: bool,
    pub enabled: bool,
    pub group: u8,
    pub power: u8,
    pub sent: Vec<String>,
    pub inbox: VecDeque<String>,
}

impl Default for MockRadio {
    fn default() -> Self {
        Self {
            fitted: true,
            enabled: false,
            group: 0,
            power: 6,
            sent: Vec::new(),
            inbox: VecDeque::new(),
        }
    }
}

impl MockRadio {
    fn fitted(&self) -> Result<(), CapabilityError> {
        if self.fitted {
            Ok(())
        } else {
            Err(CapabilityError::NotFitted)
        }
    }
}

impl Radio for MockRadio {
    fn enable(&mut self) -> Result<(), CapabilityError> {
        self.fitted()?;
        self.enabled = true;
        Ok(())
    }

    fn disable(&mut self) -> Result<(), CapabilityError> {
        self.fitted()?;
        self.enabled = false;
        Ok(())
    }

    fn set_group(&mut self, group: u8) -> Result<(), CapabilityError> {
        self.fitted()?;
        self.group = group;
        Ok(())
    }

    fn set_power(&mut self, power: u8) -> Result<(), CapabilityError> {
        self.fitted()?;
        self.power = power;
        Ok(())
    }

    fn send(&mut self, message: &str) -> Result<(), CapabilityError> {
        self.fitted()?;
        self.sent.push(message.into());
        Ok(())
    }

    fn receive(&mut self) -> Result<Option<Packet>, CapabilityError> {
        self.fitted()?;
        let Some(message) = self.inbox.pop_front() else {
            return Ok(None);
        };
        let mut packet = Packet::new();
        packet
            .push_str(&message)
            .map_err(|_| CapabilityError::Hardware)?;
        Ok(Some(packet))
    }
}

#[derive(Debug)]
pub struct MockCompass {
    pub calibrated: bool,
    pub calibration_succeeds: bool,
    pub heading: i32,
    pub field: [i32; 3],
}

impl Default for MockCompass {
    fn default() -> Self {
        Self {
            calibrated: false,
            calibration_succeeds: true,
            heading: 0,
            field: [0; 3],
        }
    }
}

impl Compass for MockCompass {
    fn calibrate(&mut self) -> Result<(), CapabilityError> {
        self.calibrated = self.calibration_succeeds;
        Ok(())
    }

    fn is_calibrated(&self) -> Result<bool, CapabilityError> {
        Ok(self.calibrated)
    }

    fn clear_calibration(&mut self) -> Result<(), CapabilityError> {
        self.calibrated = false;
        Ok(())
    }

    fn heading(&mut self) -> Result<i32, CapabilityError> {
        Ok(self.heading)
    }

    fn field(&mut self, axis: Axis) -> Result<i32, CapabilityError> {
        Ok(self.field[axis as usize])
    }

    fn field_strength(&mut self) -> Result<i32, CapabilityError> {
        let sum: f64 = self.field.iter().map(|v| (*v as f64) * (*v as f64)).sum();
        Ok(sum.sqrt() as i32)
    }
}

#[derive(Debug, Default)]
pub struct MockAccelerometer {
    pub current: Option<Gesture>,
    pub seen: Vec<Gesture>,
    pub acceleration: [i32; 3],
}

impl Accelerometer for MockAccelerometer {
    fn acceleration(&mut self, axis: Axis) -> Result<i32, CapabilityError> {
        Ok(self.acceleration[axis as usize])
    }

    fn current_gesture(&mut self) -> Result<Option<Gesture>, CapabilityError> {
        Ok(self.current)
    }

    fn was_gesture(&mut self, gesture: Gesture) -> Result<bool, CapabilityError> {
        let before = self.seen.len();
        self.seen.retain(|g| *g != gesture);
        Ok(self.seen.len() != before)
    }
}

#[derive(Debug, Default)]
pub struct MockTone {
    pub frequency: u32,
}

impl ToneGenerator for MockTone {
    fn pitch(&mut self, frequency: u32) -> Result<(), CapabilityError> {
        self.frequency = frequency;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), CapabilityError> {
        self.frequency = 0;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockButtons {
    pub pressed: [bool; 2],
    pub latched: [bool; 2],
    pub presses: [u32; 2],
}

impl Buttons for MockButtons {
    fn is_pressed(&mut self, button: ButtonId) -> Result<bool, CapabilityError> {
        Ok(self.pressed[button as usize])
    }

    fn was_pressed(&mut self, button: ButtonId) -> Result<bool, CapabilityError> {
        Ok(core::mem::take(&mut self.latched[button as usize]))
    }

    fn take_presses(&mut self, button: ButtonId) -> Result<u32, CapabilityError> {
        Ok(core::mem::take(&mut self.presses[button as usize]))
    }
}

#[derive(Debug, Default)]
pub struct MockPins {
    pub digital: [u8; PINS],
    pub analog: [u16; PINS],
    pub period_us: [u32; PINS],
}

fn pin_index(pin: u8) -> Result<usize, CapabilityError> {
    let index = pin as usize;
    if index < PINS {
        Ok(index)
    } else {
        Err(CapabilityError::InvalidArgument)
    }
}

impl EdgePins for MockPins {
    fn read_digital(&mut self, pin: u8) -> Result<u8, CapabilityError> {
        Ok(self.digital[pin_index(pin)?])
    }

    fn write_digital(&mut self, pin: u8, high: bool) -> Result<(), CapabilityError> {
        self.digital[pin_index(pin)?] = high as u8;
        Ok(())
    }

    fn read_analog(&mut self, pin: u8) -> Result<u16, CapabilityError> {
        Ok(self.analog[pin_index(pin)?])
    }

    fn write_analog(&mut self, pin: u8, duty: u16) -> Result<(), CapabilityError> {
        self.analog[pin_index(pin)?] = duty;
        Ok(())
    }

    fn set_analog_period_us(&mut self, pin: u8, period_us: u32) -> Result<(), CapabilityError> {
        self.period_us[pin_index(pin)?] = period_us;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockSystem {
    pub uptime_ms: u64,
    pub temperature: i32,
}

impl SystemInfo for MockSystem {
    fn running_time_ms(&self) -> u64 {
        self.uptime_ms
    }

    fn temperature(&mut self) -> Result<i32, CapabilityError> {
        Ok(self.temperature)
    }
}

#[derive(Debug, Default)]
pub struct MockBoard {
    pub display: MockDisplay,
    pub radio: MockRadio,
    pub compass: MockCompass,
    pub accelerometer: MockAccelerometer,
    pub tone: MockTone,
    pub buttons: MockButtons,
    pub pins: MockPins,
    pub system: MockSystem,
}

impl Board for MockBoard {
    type Display = MockDisplay;
    type Radio = MockRadio;
    type Compass = MockCompass;
    type Accelerometer = MockAccelerometer;
    type Tone = MockTone;
    type Buttons = MockButtons;
    type Pins = MockPins;
    type System = MockSystem;

    fn display(&mut self) -> &mut MockDisplay {
        &mut self.display
    }

    fn radio(&mut self) -> &mut MockRadio {
        &mut self.radio
    }

    fn compass(&mut self) -> &mut MockCompass {
        &mut self.compass
    }

    fn accelerometer(&mut self) -> &mut MockAccelerometer {
        &mut self.accelerometer
    }

    fn tone(&mut self) -> &mut MockTone {
        &mut self.tone
    }

    fn buttons(&mut self) -> &mut MockButtons {
        &mut self.buttons
    }

    fn pins(&mut self) -> &mut MockPins {
        &mut self.pins
    }

    fn system(&mut self) -> &mut MockSystem {
        &mut self.system
    }
}

/// Dispatcher over a fresh mock board with pins 0-2 exposed
pub fn dispatcher() -> Dispatcher<MockBoard> {
    let registry = Registry::standard(&[0, 1, 2]).expect("standard registry");
    Dispatcher::new(MockBoard::default(), registry)
}

/// Serial link fed from a script of received bytes
#[derive(Debug, Default)]
pub struct MockSerial {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
    pub flushes: usize,
}

/// The script ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted;

impl MockSerial {
    pub fn with_input(bytes: &[u8]) -> Self {
        Self {
            rx: bytes.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl UartRx for MockSerial {
    type Error = Exhausted;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<(), Exhausted> {
        for slot in buf.iter_mut() {
            *slot = self.rx.pop_front().ok_or(Exhausted)?;
        }
        Ok(())
    }
}

impl UartTx for MockSerial {
    type Error = Exhausted;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Exhausted> {
        self.tx.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Exhausted> {
        self.flushes += 1;
        Ok(())
    }
}
