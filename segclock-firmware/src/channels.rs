//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Only the controller task owns the countdown; everything else talks to it
//! through `TIMER_MESSAGES`.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use segclock_core::countdown::{RunId, TimerMessage};

/// Channel capacity for timer messages
const TIMER_CHANNEL_SIZE: usize = 8;

/// Messages for the controller (ticks, button actions)
pub static TIMER_MESSAGES: Channel<CriticalSectionRawMutex, TimerMessage, TIMER_CHANNEL_SIZE> =
    Channel::new();

/// Control for the 1 Hz tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickControl {
    /// Drop any running ticker and tick for this run
    Start(RunId),
    /// Drop any running ticker
    Stop,
}

/// Tick source control (updated by controller)
pub static TICK_CONTROL: Signal<CriticalSectionRawMutex, TickControl> = Signal::new();

/// Signal that the screen buffer changed
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Completion indicator; true while a finished countdown is showing
pub static ALERT: Signal<CriticalSectionRawMutex, bool> = Signal::new();
