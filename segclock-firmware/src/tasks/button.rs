//! Button task
//!
//! A short press restarts the last duration; a long press stops the
//! countdown.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Instant, Timer};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use segclock_core::countdown::TimerMessage;

use crate::channels::TIMER_MESSAGES;

/// Debounce delay after a level change
const DEBOUNCE_MS: u64 = 20;

/// Minimum held time for a short press
const MIN_PRESS_MS: u64 = 50;

/// Held time that turns a press into a long press
const LONG_PRESS_MS: u64 = 800;

/// Kind of button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    Short,
    Long,
}

impl Press {
    /// Timer message sent for this press
    pub fn message(self) -> TimerMessage {
        match self {
            Press::Short => TimerMessage::Attach,
            Press::Long => TimerMessage::Detach,
        }
    }
}

/// Wait for one press on an active-low button
///
/// Returns `None` for glitches shorter than the minimum press.
pub async fn wait_press<B>(btn: &mut B) -> Option<Press>
where
    B: Wait + InputPin,
{
    btn.wait_for_falling_edge().await.ok()?;
    let press_start = Instant::now();

    Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
    if !btn.is_low().ok()? {
        return None;
    }

    match with_timeout(Duration::from_millis(LONG_PRESS_MS), btn.wait_for_rising_edge()).await {
        Ok(_) => {
            if press_start.elapsed().as_millis() > MIN_PRESS_MS {
                Some(Press::Short)
            } else {
                None
            }
        }
        Err(_) => {
            // Wait for actual release
            btn.wait_for_rising_edge().await.ok()?;
            Some(Press::Long)
        }
    }
}

/// Button press task
#[embassy_executor::task]
pub async fn button_task(mut btn: Input<'static>) {
    info!("Button task started");

    loop {
        if let Some(press) = wait_press(&mut btn).await {
            debug!("Button: {:?}", press);
            TIMER_MESSAGES.send(press.message()).await;
        }

        // Debounce after release
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
    }
}
