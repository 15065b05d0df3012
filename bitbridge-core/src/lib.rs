//! Board-agnostic core of the serial command bridge
//!
//! This crate turns request frames into capability calls and capability
//! results into response frames, without knowing anything about the chip it
//! runs on:
//!
//! - Capability traits and the [`traits::Board`] that gathers them
//! - The closed registry of names callable through opcodes 0x11-0x13
//! - The dispatcher and its error taxonomy
//! - The bridge state machine and blocking serve loop
//! - Configuration types and the `bridge.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bridge;
pub mod config;
pub mod dispatch;
pub mod registry;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
