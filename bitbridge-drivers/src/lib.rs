//! Hardware driver implementations
//!
//! Concrete implementations of the capability traits in bitbridge-core:
//!
//! - LED matrix framebuffer, font, scroller and row scanner
//! - Debounced buttons with press history
//! - `Absent`, for peripherals a board does not have

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod absent;
pub mod button;
pub mod matrix;

pub use absent::Absent;
pub use button::{Button, ButtonPair, ButtonState};
pub use matrix::{LedMatrix, MatrixScanner};
