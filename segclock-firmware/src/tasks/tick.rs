//! Tick task
//!
//! Sends one stamped tick per second to the controller while a run is
//! active. A new `TickControl` always drops the current ticker first, so
//! at most one tick stream exists at a time.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use segclock_core::countdown::{RunId, TimerMessage};

use crate::channels::{TickControl, TICK_CONTROL, TIMER_MESSAGES};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Tick task - one tick per second for the current run
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut run: Option<RunId> = None;

    loop {
        let Some(current) = run else {
            run = match TICK_CONTROL.wait().await {
                TickControl::Start(next) => Some(next),
                TickControl::Stop => None,
            };
            continue;
        };

        debug!("Ticking for run {}", current.0);
        let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

        run = loop {
            match select(ticker.next(), TICK_CONTROL.wait()).await {
                Either::First(()) => TIMER_MESSAGES.send(TimerMessage::Tick(current)).await,
                Either::Second(TickControl::Start(next)) => break Some(next),
                Either::Second(TickControl::Stop) => break None,
            }
        };
    }
}
