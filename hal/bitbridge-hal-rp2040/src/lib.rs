//! RP2040-specific HAL for the bitbridge firmware
//!
//! Wraps embassy-rp blocking drivers so they satisfy the chip-agnostic
//! traits in `bitbridge-hal` and `bitbridge-core`:
//!
//! - UART halves for the host link
//! - GPIO outputs and inputs for the LED matrix and buttons
//! - Edge connector pins (digital and ADC)
//! - PWM buzzer for tones
//! - Uptime clock and the on-die temperature sensor

#![cfg_attr(not(test), no_std)]

pub mod edge;
pub mod gpio;
pub mod pwm;
pub mod system;
pub mod uart;

pub use edge::RpEdgePins;
pub use gpio::{RpInput, RpOutput};
pub use pwm::PwmTone;
pub use system::RpSystem;
pub use uart::{BlockingUartRx, BlockingUartTx};
