//! Countdown state machine
//!
//! Decomposes a duration into hour/minute/second counters, advances them
//! once per tick and decides when a run is complete.

mod counters;
mod events;
mod machine;
mod timer;
mod visibility;

pub use counters::{Clamped, Counters, MAX_HOURS, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
pub use events::Event;
pub use machine::State;
pub use timer::{
    CountdownTimer, DurationSet, Notification, RunId, Snapshot, TickOutcome, TimerMessage,
};
pub use visibility::{Group, GroupVisibility, VisibilityPolicy};
