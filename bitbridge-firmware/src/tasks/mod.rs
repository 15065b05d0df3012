//! Embassy async tasks
//!
//! All of these run on the interrupt-priority executor so they keep time
//! while the serve loop blocks on the UART.

pub mod buttons;
pub mod matrix;

pub use buttons::button_task;
pub use matrix::{matrix_scan_task, scroll_task, Scanner};
