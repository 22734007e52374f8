//! Countdown timer
//!
//! `CountdownTimer` is the single owner of the live counters. Ticks are
//! stamped with the [`RunId`] of the run that scheduled them, so a tick
//! from a cancelled run can never mutate a newer one.

use super::counters::Counters;
use super::events::Event;
use super::machine::State;
use super::visibility::{GroupVisibility, VisibilityPolicy};
use crate::value::{DisplayValue, InvalidDigitValue};

/// Identifies one countdown run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunId(pub u32);

impl RunId {
    pub fn next(self) -> Self {
        RunId(self.0.wrapping_add(1))
    }
}

/// Report returned when a new duration is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DurationSet {
    pub run: RunId,
    pub counters: Counters,
    /// Requested hour when it had to be clamped to 99
    pub clamped_from: Option<u32>,
}

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub run: Option<RunId>,
    pub state: State,
    pub counters: Counters,
    pub visibility: GroupVisibility,
}

impl Snapshot {
    /// Snapshot shown before any duration is set
    pub const BLANK: Snapshot = Snapshot {
        run: None,
        state: State::Idle,
        counters: Counters::ZERO,
        visibility: GroupVisibility::ALL_VISIBLE,
    };

    /// Check if every digit should render unlit
    pub fn is_blank(&self) -> bool {
        self.state == State::Idle
    }

    /// Two-digit values for `[hour, minute, second]`
    pub fn values(&self) -> Result<[DisplayValue; 3], InvalidDigitValue> {
        self.counters.display_values()
    }
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Stale run, not running, or already finished; nothing changed
    Ignored,
    /// Counters advanced; redraw
    Advanced(Snapshot),
    /// Counters advanced and the run just completed; redraw and notify
    Finished(Snapshot),
}

/// Messages accepted by [`CountdownTimer::handle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerMessage {
    SetDuration { hour: u32, minute: u32, second: u32 },
    SetTotalSeconds(u32),
    SetMillis(u32),
    Tick(RunId),
    Detach,
    Attach,
}

/// Outcome of a handled message, for the rendering and tick layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    /// A new run started; restart ticking and draw the initial frame
    Started { set: DurationSet, snapshot: Snapshot },
    /// Redraw with the new counters
    Redraw(Snapshot),
    /// The run completed; fired once per run
    Finished(Snapshot),
    /// The run was cancelled; stop ticking
    Stopped(Snapshot),
}

/// Single-owner countdown state
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    state: State,
    policy: VisibilityPolicy,
    target: Option<Counters>,
    counters: Counters,
    run: Option<RunId>,
    last_run: RunId,
}

impl CountdownTimer {
    pub fn new(policy: VisibilityPolicy) -> Self {
        Self {
            state: State::Idle,
            policy,
            target: None,
            counters: Counters::ZERO,
            run: None,
            last_run: RunId::default(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn policy(&self) -> VisibilityPolicy {
        self.policy
    }

    /// Replace the visibility flags; applies from the next snapshot
    pub fn set_policy(&mut self, policy: VisibilityPolicy) {
        self.policy = policy;
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// The duration the current (or last) run started from
    pub fn target(&self) -> Option<Counters> {
        self.target
    }

    /// The active run, if ticks are being accepted
    pub fn current_run(&self) -> Option<RunId> {
        self.run
    }

    pub fn snapshot(&self) -> Snapshot {
        if self.state == State::Idle {
            return Snapshot {
                run: None,
                ..Snapshot::BLANK
            };
        }
        Snapshot {
            run: self.run,
            state: self.state,
            counters: self.counters,
            visibility: self.policy.visibility(&self.counters),
        }
    }

    /// Install a new duration and start a fresh run
    ///
    /// Hours above 99 are clamped. Any previous run is superseded, so
    /// its pending ticks are ignored from here on.
    pub fn set_duration(&mut self, hour: u32, minute: u32, second: u32) -> DurationSet {
        let clamped = Counters::clamped(hour, minute, second);
        self.start(clamped.counters, clamped.clamped_from)
    }

    pub fn set_duration_minutes_seconds(&mut self, minute: u32, second: u32) -> DurationSet {
        self.set_duration(0, minute, second)
    }

    pub fn set_duration_seconds(&mut self, second: u32) -> DurationSet {
        self.set_duration(0, 0, second)
    }

    /// Install a duration given as total seconds
    pub fn set_duration_secs(&mut self, total_seconds: u32) -> DurationSet {
        let clamped = Counters::from_total_seconds(total_seconds);
        self.start(clamped.counters, clamped.clamped_from)
    }

    /// Install a duration given in milliseconds
    pub fn set_duration_millis(&mut self, millis: u32) -> DurationSet {
        let clamped = Counters::from_millis(millis);
        self.start(clamped.counters, clamped.clamped_from)
    }

    fn start(&mut self, counters: Counters, clamped_from: Option<u32>) -> DurationSet {
        let run = self.last_run.next();
        self.last_run = run;
        self.run = Some(run);
        self.target = Some(counters);
        self.counters = counters;
        self.state = self.state.transition(Event::Start);

        DurationSet {
            run,
            counters,
            clamped_from,
        }
    }

    /// Advance the run stamped `run` by one second
    pub fn tick(&mut self, run: RunId) -> TickOutcome {
        if self.run != Some(run) || !self.state.ticks_allowed() {
            return TickOutcome::Ignored;
        }

        self.counters.decrement();

        if self.policy.completion_satisfied(&self.counters) {
            self.state = self.state.transition(Event::Complete);
            TickOutcome::Finished(self.snapshot())
        } else {
            TickOutcome::Advanced(self.snapshot())
        }
    }

    /// Cancel the current run
    ///
    /// Returns `false` if there was nothing to cancel. The target
    /// duration is kept for [`attach`](Self::attach).
    pub fn detach(&mut self) -> bool {
        if self.run.is_none() {
            return false;
        }
        self.run = None;
        self.state = self.state.transition(Event::Detach);
        true
    }

    /// Restart the last configured duration
    ///
    /// Does nothing if no duration was ever set.
    pub fn attach(&mut self) -> Option<DurationSet> {
        let target = self.target?;
        Some(self.start(target, None))
    }

    /// Apply a message and report what the outer layers should do
    pub fn handle(&mut self, message: TimerMessage) -> Option<Notification> {
        let set = match message {
            TimerMessage::SetDuration {
                hour,
                minute,
                second,
            } => self.set_duration(hour, minute, second),
            TimerMessage::SetTotalSeconds(total) => self.set_duration_secs(total),
            TimerMessage::SetMillis(millis) => self.set_duration_millis(millis),
            TimerMessage::Attach => self.attach()?,
            TimerMessage::Tick(run) => {
                return match self.tick(run) {
                    TickOutcome::Ignored => None,
                    TickOutcome::Advanced(snapshot) => Some(Notification::Redraw(snapshot)),
                    TickOutcome::Finished(snapshot) => Some(Notification::Finished(snapshot)),
                };
            }
            TimerMessage::Detach => {
                return self
                    .detach()
                    .then(|| Notification::Stopped(self.snapshot()));
            }
        };

        Some(Notification::Started {
            set,
            snapshot: self.snapshot(),
        })
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(VisibilityPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run_ticks(timer: &mut CountdownTimer, run: RunId, ticks: u32) -> heapless::Vec<u32, 8> {
        let mut finished_at = heapless::Vec::new();
        for i in 1..=ticks {
            if let TickOutcome::Finished(_) = timer.tick(run) {
                let _ = finished_at.push(i);
            }
        }
        finished_at
    }

    #[test]
    fn test_ninety_second_run_completes_once() {
        let mut timer = CountdownTimer::default();
        let set = timer.set_duration(0, 1, 30);
        assert_eq!(set.counters, Counters::new(0, 1, 30));

        let finished_at = run_ticks(&mut timer, set.run, 91);
        assert_eq!(finished_at.as_slice(), &[90]);
        assert_eq!(timer.counters(), Counters::ZERO);
        assert_eq!(timer.state(), State::Finished);
    }

    #[test]
    fn test_hour_clamp_is_reported() {
        let mut timer = CountdownTimer::default();
        let set = timer.set_duration(100, 0, 0);
        assert_eq!(set.counters, Counters::new(99, 0, 0));
        assert_eq!(set.clamped_from, Some(100));
        assert_eq!(timer.counters().hour, 99);
    }

    #[test]
    fn test_millis_input() {
        let mut timer = CountdownTimer::default();
        let set = timer.set_duration_millis(3_661_000);
        assert_eq!(set.counters, Counters::new(1, 1, 1));
    }

    #[test]
    fn test_short_forms() {
        let mut timer = CountdownTimer::default();
        assert_eq!(
            timer.set_duration_minutes_seconds(2, 5).counters,
            Counters::new(0, 2, 5)
        );
        assert_eq!(timer.set_duration_seconds(9).counters, Counters::new(0, 0, 9));
        assert_eq!(timer.set_duration_secs(125).counters, Counters::new(0, 2, 5));
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut timer = CountdownTimer::default();
        let set = timer.set_duration(0, 0, 0);
        assert_eq!(timer.state(), State::Running);

        assert!(matches!(timer.tick(set.run), TickOutcome::Finished(_)));
        assert_eq!(timer.counters(), Counters::ZERO);

        // no mutation, no second completion
        assert_eq!(timer.tick(set.run), TickOutcome::Ignored);
        assert_eq!(timer.counters(), Counters::ZERO);
    }

    #[test]
    fn test_detach_stops_ticks() {
        let mut timer = CountdownTimer::default();
        let set = timer.set_duration(0, 0, 5);
        assert!(matches!(timer.tick(set.run), TickOutcome::Advanced(_)));

        assert!(timer.detach());
        assert_eq!(timer.state(), State::Idle);
        for _ in 0..10 {
            assert_eq!(timer.tick(set.run), TickOutcome::Ignored);
        }
        assert_eq!(timer.counters(), Counters::new(0, 0, 4));
        assert!(!timer.detach());
    }

    #[test]
    fn test_restart_ignores_old_run() {
        let mut timer = CountdownTimer::default();
        let first = timer.set_duration(0, 0, 10);
        let second = timer.set_duration(0, 0, 3);
        assert_ne!(first.run, second.run);

        assert_eq!(timer.tick(first.run), TickOutcome::Ignored);
        assert_eq!(timer.counters(), Counters::new(0, 0, 3));
        assert!(matches!(timer.tick(second.run), TickOutcome::Advanced(_)));
    }

    #[test]
    fn test_attach_restarts_target() {
        let mut timer = CountdownTimer::default();
        assert_eq!(timer.attach(), None);

        let set = timer.set_duration(0, 0, 3);
        timer.tick(set.run);
        timer.detach();

        let again = timer.attach().unwrap();
        assert_ne!(again.run, set.run);
        assert_eq!(again.counters, Counters::new(0, 0, 3));
        assert_eq!(timer.state(), State::Running);
    }

    #[test]
    fn test_hidden_hour_completes_with_hours_left() {
        let mut timer = CountdownTimer::new(VisibilityPolicy::new(true, false));
        let set = timer.set_duration(2, 0, 2);
        let finished_at = run_ticks(&mut timer, set.run, 5);
        assert_eq!(finished_at.as_slice(), &[2]);
        assert_eq!(timer.counters(), Counters::new(2, 0, 0));
    }

    #[test]
    fn test_hidden_minute_completes_with_minutes_left() {
        let mut timer = CountdownTimer::new(VisibilityPolicy::new(false, true));
        let set = timer.set_duration(0, 5, 3);
        let finished_at = run_ticks(&mut timer, set.run, 6);
        assert_eq!(finished_at.as_slice(), &[3]);
        assert_eq!(timer.counters(), Counters::new(0, 5, 0));
        assert_eq!(timer.state(), State::Finished);
    }

    #[test]
    fn test_hidden_minute_still_waits_for_hours() {
        // hour group shown and nonzero, so seconds at zero are not enough
        let mut timer = CountdownTimer::new(VisibilityPolicy::new(false, true));
        let set = timer.set_duration(1, 5, 3);
        let finished_at = run_ticks(&mut timer, set.run, 3);
        assert!(finished_at.is_empty());
        assert_eq!(timer.counters(), Counters::new(1, 5, 0));
        assert_eq!(timer.state(), State::Running);
    }

    #[test]
    fn test_snapshot_blank_until_started() {
        let mut timer = CountdownTimer::default();
        assert!(timer.snapshot().is_blank());
        timer.set_duration(0, 0, 1);
        let snap = timer.snapshot();
        assert!(!snap.is_blank());
        assert_eq!(snap.values().unwrap()[2], DisplayValue::new(1).unwrap());
    }

    #[test]
    fn test_snapshot_visibility_tracks_counters() {
        let mut timer = CountdownTimer::new(VisibilityPolicy::new(true, true));
        let set = timer.set_duration(0, 1, 0);
        assert!(timer.snapshot().visibility.minute);
        match timer.tick(set.run) {
            TickOutcome::Advanced(snap) => {
                assert_eq!(snap.counters, Counters::new(0, 0, 59));
                assert!(!snap.visibility.minute);
                assert!(!snap.visibility.hour);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_handle_messages() {
        let mut timer = CountdownTimer::default();
        assert_eq!(timer.handle(TimerMessage::Detach), None);
        assert_eq!(timer.handle(TimerMessage::Attach), None);

        let run = match timer.handle(TimerMessage::SetTotalSeconds(2)) {
            Some(Notification::Started { set, snapshot }) => {
                assert_eq!(snapshot.counters, Counters::new(0, 0, 2));
                set.run
            }
            other => panic!("unexpected {other:?}"),
        };

        assert!(matches!(
            timer.handle(TimerMessage::Tick(run)),
            Some(Notification::Redraw(_))
        ));
        assert!(matches!(
            timer.handle(TimerMessage::Tick(run)),
            Some(Notification::Finished(_))
        ));
        assert_eq!(timer.handle(TimerMessage::Tick(run)), None);
        assert!(matches!(
            timer.handle(TimerMessage::Detach),
            Some(Notification::Stopped(s)) if s.is_blank()
        ));
        assert_eq!(timer.handle(TimerMessage::Tick(run)), None);
    }

    #[test]
    fn test_run_id_wraps() {
        assert_eq!(RunId(u32::MAX).next(), RunId(0));
    }

    proptest! {
        #[test]
        fn prop_completion_fires_at_most_once(
            h in 0u32..=1,
            m in 0u32..60,
            s in 0u32..60,
            hide_hour in any::<bool>(),
            hide_minute in any::<bool>(),
            extra in 0u32..5,
        ) {
            let mut timer = CountdownTimer::new(VisibilityPolicy::new(hide_hour, hide_minute));
            let set = timer.set_duration(h, m, s);
            let total = set.counters.total_seconds() as u32;
            let finished_at = run_ticks(&mut timer, set.run, total + 1 + extra);
            prop_assert_eq!(finished_at.len(), 1);
        }

        #[test]
        fn prop_default_policy_finishes_at_total(total in 0u32..7200) {
            let mut timer = CountdownTimer::default();
            let set = timer.set_duration_secs(total);
            let finished_at = run_ticks(&mut timer, set.run, total + 2);
            prop_assert_eq!(finished_at.as_slice(), &[total.max(1)]);
        }
    }
}
