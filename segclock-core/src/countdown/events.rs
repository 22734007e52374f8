//! Events that trigger countdown state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A new duration was set (or the last one restarted on attach)
    Start,
    /// The completion predicate was satisfied on a tick
    Complete,
    /// The timer was detached from its display; all ticking stops
    Detach,
}
