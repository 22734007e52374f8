//! Completion indicator
//!
//! Lights an LED while a finished countdown is on screen.

use defmt::*;
use embassy_rp::gpio::{Level, Output};

use crate::channels::ALERT;

/// Alert task - drives the completion LED
#[embassy_executor::task]
pub async fn alert_task(mut led: Output<'static>) {
    info!("Alert task started");

    loop {
        let on = ALERT.wait().await;
        led.set_level(if on { Level::High } else { Level::Low });
        trace!("Alert {}", on);
    }
}
