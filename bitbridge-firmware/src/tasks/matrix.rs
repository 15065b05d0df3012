//! LED matrix refresh
//!
//! The scanner lights one row per tick, cycling through the brightness
//! subframes. The scroll task moves running text one column at a time.

use defmt::*;
use embassy_time::{Duration, Ticker};

use bitbridge_drivers::matrix::{SCAN_INTERVAL_US, SCROLL_INTERVAL_MS};
use bitbridge_drivers::MatrixScanner;
use bitbridge_hal_rp2040::RpOutput;

use crate::shared::MATRIX;

pub type Scanner = MatrixScanner<RpOutput<'static>, RpOutput<'static>>;

#[embassy_executor::task]
pub async fn matrix_scan_task(mut scanner: Scanner) {
    info!("Matrix scan task started");

    let mut ticker = Ticker::every(Duration::from_micros(SCAN_INTERVAL_US));

    loop {
        MATRIX.lock(|m| scanner.step(&m.borrow()));
        ticker.next().await;
    }
}

#[embassy_executor::task]
pub async fn scroll_task() {
    let mut ticker = Ticker::every(Duration::from_millis(SCROLL_INTERVAL_MS));

    loop {
        ticker.next().await;
        MATRIX.lock(|m| m.borrow_mut().tick());
    }
}
