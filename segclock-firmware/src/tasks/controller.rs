//! Main controller task
//!
//! Sole owner of the countdown. Applies timer messages, restarts or stops
//! the tick source, and publishes snapshots to the display task.

use defmt::*;

use segclock_core::config::TimerConfig;
use segclock_core::countdown::{CountdownTimer, Notification, Snapshot, TimerMessage, MAX_HOURS};
use segclock_display::TimerStyle;

use crate::channels::{TickControl, ALERT, SCREEN_UPDATE, TICK_CONTROL, TIMER_MESSAGES};
use crate::tasks::display::SCREEN_BUFFER;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(config: TimerConfig) {
    info!("Controller task started");

    let mut timer = CountdownTimer::new(config.policy());

    SCREEN_BUFFER
        .lock()
        .await
        .set_style(TimerStyle::from_config(&config));

    // Start the configured duration right away
    let initial = config.initial;
    let boot = TimerMessage::SetDuration {
        hour: initial.hour,
        minute: initial.minute,
        second: initial.second,
    };
    if let Some(notification) = timer.handle(boot) {
        dispatch(notification).await;
    }

    loop {
        let message = TIMER_MESSAGES.receive().await;
        trace!("Message: {:?}", message);

        if let Some(notification) = timer.handle(message) {
            dispatch(notification).await;
        }
    }
}

/// Act on what the countdown reported
async fn dispatch(notification: Notification) {
    match notification {
        Notification::Started { set, snapshot } => {
            if let Some(hour) = set.clamped_from {
                warn!("Hour {} clamped to {}", hour, MAX_HOURS);
            }
            info!(
                "Countdown started: {:02}:{:02}:{:02}",
                set.counters.hour, set.counters.minute, set.counters.second
            );
            TICK_CONTROL.signal(TickControl::Start(set.run));
            ALERT.signal(false);
            publish(snapshot).await;
        }
        Notification::Redraw(snapshot) => {
            publish(snapshot).await;
        }
        Notification::Finished(snapshot) => {
            info!("Countdown finished");
            // Further ticks would be no-ops
            TICK_CONTROL.signal(TickControl::Stop);
            ALERT.signal(true);
            publish(snapshot).await;
        }
        Notification::Stopped(snapshot) => {
            info!("Countdown stopped");
            TICK_CONTROL.signal(TickControl::Stop);
            ALERT.signal(false);
            publish(snapshot).await;
        }
    }
}

/// Hand a snapshot to the display task
async fn publish(snapshot: Snapshot) {
    debug!("State: {:?}", snapshot.state);
    SCREEN_BUFFER.lock().await.set_snapshot(snapshot);
    SCREEN_UPDATE.signal(());
}
