//! segclock - seven-segment countdown timer firmware
//!
//! RP2040 firmware that counts down a configured duration and draws it as
//! seven-segment digits on a 128x64 SH1106 OLED.
//!
//! Wiring (Raspberry Pi Pico):
//! - OLED on I2C0: GPIO4 = SDA, GPIO5 = SCL
//! - Button to ground on GPIO15 (short press restarts, long press stops)
//! - Completion LED on GPIO25 (onboard)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use crate::sh1106::Sh1106;

mod channels;
mod config;
mod sh1106;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

/// I2C bus frequency for the OLED
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("segclock firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Setup I2C for OLED
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);

    let mut display = Sh1106::new(i2c);
    if let Err(e) = display.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
    }

    let button = Input::new(p.PIN_15, Pull::Up);
    let led = Output::new(p.PIN_25, Level::Low);

    // Spawn tasks
    spawner.spawn(tasks::display_task(display)).unwrap();
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::alert_task(led)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::controller_task(config)).unwrap();

    info!("All tasks spawned, timer running");
}
