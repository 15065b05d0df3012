//! bitbridge command protocol
//!
//! The host drives the board with one command at a time over a serial link.
//! Requests and responses share a single delimiter byte:
//!
//! ```text
//! request   ┌────────┬──────────────────────┬───────┐
//!           │ OPCODE │ PAYLOAD (UTF-8)      │ 0x01  │
//!           │ 1B     │ 0–256B, no 0x01      │ 1B    │
//!           └────────┴──────────────────────┴───────┘
//!
//! success   ┌──────────────────────┬───────┐
//!           │ RESULT TEXT (UTF-8)  │ 0x01  │
//!           └──────────────────────┴───────┘
//!
//! failure   ┌───────┬───────┐
//!           │ 0x02  │ 0x01  │
//!           └───────┴───────┘
//! ```
//!
//! A radio poll (`0x53`) that finds nothing answers with no bytes at all.
//!
//! This crate only knows bytes, text and typed commands. Executing a command
//! against hardware is the job of `bitbridge-core`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;
pub mod gesture;
pub mod image;
pub mod opcode;
pub mod payload;
pub mod response;

pub use command::{Command, MAX_RADIO_POWER};
pub use frame::{
    DecodeError, Frame, FrameError, FrameReader, ReaderState, DELIMITER, MAX_FRAME_SIZE,
    MAX_PAYLOAD_SIZE,
};
pub use gesture::Gesture;
pub use image::{Image, IMAGE_MAX_DIM, MAX_BRIGHTNESS};
pub use opcode::Opcode;
pub use payload::{CoercionError, Target};
pub use response::{Response, ERROR_MARKER, MAX_RESPONSE_SIZE, MAX_TEXT_LEN, SUCCESS_MARKER};
