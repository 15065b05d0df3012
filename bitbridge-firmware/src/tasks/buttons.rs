//! Button sampling
//!
//! Samples both buttons at a fixed rate into the shared debounce state,
//! so presses between two requests are still counted.

use defmt::*;
use embassy_time::{Duration, Ticker};

use bitbridge_drivers::button::SAMPLE_INTERVAL_MS;
use bitbridge_drivers::Button;
use bitbridge_hal_rp2040::RpInput;

use crate::shared::BUTTONS;

#[embassy_executor::task]
pub async fn button_task(a: Button<RpInput<'static>>, b: Button<RpInput<'static>>) {
    info!("Button task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    loop {
        ticker.next().await;

        let (pressed_a, pressed_b) = BUTTONS.lock(|pair| {
            let mut pair = pair.borrow_mut();
            (a.poll_into(&mut pair.a), b.poll_into(&mut pair.b))
        });

        if pressed_a {
            debug!("Button A pressed");
        }
        if pressed_b {
            debug!("Button B pressed");
        }
    }
}
