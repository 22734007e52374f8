//! Countdown state machine definition
//!
//! Whether a tick mutates the counters is a function of the current
//! state only.

use super::events::Event;

/// Countdown states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No active countdown
    #[default]
    Idle,
    /// Ticking once per second
    Running,
    /// Completion was signalled; waits for a new duration
    Finished,
}

impl State {
    /// Check if ticks advance the counters in this state
    pub fn ticks_allowed(&self) -> bool {
        matches!(self, State::Running)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // A new duration always (re)starts ticking, from any state
            (_, Start) => Running,

            (Running, Complete) => Finished,

            (Running, Detach) => Idle,
            (Finished, Detach) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
