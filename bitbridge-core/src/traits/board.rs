//! The set of capabilities a board provides

use super::{
    Accelerometer, Buttons, Compass, EdgePins, MatrixDisplay, Radio, SystemInfo, ToneGenerator,
};

/// Everything the dispatcher can reach on one board
///
/// The dispatcher only ever borrows one capability at a time, so a board
/// can hand out plain `&mut` references to fields it owns.
pub trait Board {
    type Display: MatrixDisplay;
    type Radio: Radio;
    type Compass: Compass;
    type Accelerometer: Accelerometer;
    type Tone: ToneGenerator;
    type Buttons: Buttons;
    type Pins: EdgePins;
    type System: SystemInfo;

    fn display(&mut self) -> &mut Self::Display;
    fn radio(&mut self) -> &mut Self::Radio;
    fn compass(&mut self) -> &mut Self::Compass;
    fn accelerometer(&mut self) -> &mut Self::Accelerometer;
    fn tone(&mut self) -> &mut Self::Tone;
    fn buttons(&mut self) -> &mut Self::Buttons;
    fn pins(&mut self) -> &mut Self::Pins;
    fn system(&mut self) -> &mut Self::System;
}
