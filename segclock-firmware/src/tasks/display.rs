//! Display task
//!
//! Redraws the OLED whenever the controller publishes a new snapshot.
//! Render and I2C failures are logged and the frame is dropped; the
//! countdown keeps running.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embedded_graphics::pixelcolor::BinaryColor;

use segclock_core::config::SeparatorShape;
use segclock_display::{RenderError, SegmentStyle, TimerScreen, TimerStyle};

use crate::channels::SCREEN_UPDATE;
use crate::sh1106::Sh1106;

/// Style used until the controller applies the configured one
const BOOT_STYLE: TimerStyle<BinaryColor> = TimerStyle {
    segments: SegmentStyle::new(BinaryColor::On, BinaryColor::Off),
    separator: BinaryColor::On,
    separator_background: BinaryColor::Off,
    separator_shape: SeparatorShape::Square,
    background: BinaryColor::Off,
    digit_padding: 2,
    digit_inset: 2,
};

/// Shared screen buffer protected by mutex
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, TimerScreen<BinaryColor>> =
    Mutex::new(TimerScreen::new(BOOT_STYLE));

pub type Display = Sh1106<I2c<'static, I2C0, Async>>;

/// Display task - draws frames to the SH1106
#[embassy_executor::task]
pub async fn display_task(mut display: Display) {
    info!("Display task started");

    loop {
        SCREEN_UPDATE.wait().await;

        {
            let mut screen = SCREEN_BUFFER.lock().await;
            if !screen.is_dirty() {
                continue;
            }

            match screen.draw(&mut display) {
                Ok(()) => {}
                Err(RenderError::InvalidDigit(e)) => {
                    error!("Counter {} cannot be shown as two digits", e.0);
                    screen.mark_clean();
                    continue;
                }
                Err(RenderError::Display(never)) => match never {},
            }
            screen.mark_clean();
        }

        if let Err(e) = display.flush().await {
            warn!("Display flush failed: {:?}", e);
        } else {
            trace!("Display updated");
        }
    }
}
