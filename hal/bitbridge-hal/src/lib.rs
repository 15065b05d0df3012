//! bitbridge Hardware Abstraction Layer
//!
//! Traits the bridge needs from a board, kept free of any chip crate so the
//! protocol loop and the drivers can be exercised on the host.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  bitbridge-core / bitbridge-drivers     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bitbridge-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bitbridge-firmware (embassy-rp impls)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial link to the host
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Matrix lines and buttons

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

pub use gpio::{InputPin, OutputPin};
pub use uart::{DataBits, Parity, StopBits, UartConfig, UartRx, UartTx};
