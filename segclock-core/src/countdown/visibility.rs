//! Which display groups are shown, and when a run counts as complete

use super::counters::Counters;

/// The five display groups, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Group {
    Hour,
    LeftSeparator,
    Minute,
    RightSeparator,
    Second,
}

impl Group {
    pub const ALL: [Group; 5] = [
        Group::Hour,
        Group::LeftSeparator,
        Group::Minute,
        Group::RightSeparator,
        Group::Second,
    ];

    /// Check if this group shows digits
    pub fn is_digits(&self) -> bool {
        matches!(self, Group::Hour | Group::Minute | Group::Second)
    }
}

/// Configuration flags driving group visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityPolicy {
    pub hide_hour_group_when_zero: bool,
    pub hide_minute_group_when_zero: bool,
}

/// Visibility of each group at one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupVisibility {
    pub hour: bool,
    pub minute: bool,
}

impl GroupVisibility {
    pub const ALL_VISIBLE: GroupVisibility = GroupVisibility {
        hour: true,
        minute: true,
    };

    /// Check if a group is visible
    ///
    /// Each separator follows the digit group to its left. Seconds are
    /// always shown.
    pub fn is_visible(&self, group: Group) -> bool {
        match group {
            Group::Hour | Group::LeftSeparator => self.hour,
            Group::Minute | Group::RightSeparator => self.minute,
            Group::Second => true,
        }
    }

    /// Visible groups, left to right
    pub fn visible_groups(&self) -> heapless::Vec<Group, 5> {
        Group::ALL
            .iter()
            .copied()
            .filter(|g| self.is_visible(*g))
            .collect()
    }
}

impl VisibilityPolicy {
    pub const fn new(hide_hour_group_when_zero: bool, hide_minute_group_when_zero: bool) -> Self {
        Self {
            hide_hour_group_when_zero,
            hide_minute_group_when_zero,
        }
    }

    /// Derive group visibility from the current counters
    ///
    /// A hidden minute group also hides the hour group, since nothing
    /// larger than a hidden group is worth showing.
    pub fn visibility(&self, counters: &Counters) -> GroupVisibility {
        let minute = !(self.hide_minute_group_when_zero && counters.hour == 0 && counters.minute == 0);
        let hour = minute && !(self.hide_hour_group_when_zero && counters.hour == 0);
        GroupVisibility { hour, minute }
    }

    /// Check whether the counters have reached the completion floor
    ///
    /// A group whose hide flag is set counts as satisfied whatever its
    /// counter holds.
    pub fn completion_satisfied(&self, counters: &Counters) -> bool {
        counters.second == 0
            && (self.hide_minute_group_when_zero || counters.minute == 0)
            && (self.hide_hour_group_when_zero || counters.hour == 0)
    }
}
