//! State shared between the serve loop and the periodic tasks
//!
//! The serve loop writes through the capability traits while the
//! interrupt-priority tasks scan, scroll and sample. Both sides hold the
//! lock only for a single call.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use bitbridge_drivers::{ButtonPair, LedMatrix};

/// LED matrix framebuffer (written by requests, read by the scanner)
pub static MATRIX: Mutex<CriticalSectionRawMutex, RefCell<LedMatrix>> =
    Mutex::new(RefCell::new(LedMatrix::new()));

/// Debounced button state (written by the sampler, read by requests)
pub static BUTTONS: Mutex<CriticalSectionRawMutex, RefCell<ButtonPair>> =
    Mutex::new(RefCell::new(ButtonPair::new()));
