//! Five-group horizontal layout
//!
//! Groups share the width by weight. Hidden groups collapse and the
//! visible ones spread over the freed space.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use segclock_core::countdown::{Group, GroupVisibility};
use segclock_core::geometry::Area;

/// Relative widths of hour, separator, minute, separator, second
pub const GROUP_WEIGHTS: [u32; 5] = [3, 1, 3, 1, 3];

/// Region assigned to each group; `None` when hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupAreas {
    areas: [Option<Area>; 5],
}

impl GroupAreas {
    pub fn get(&self, group: Group) -> Option<Area> {
        self.areas[group_index(group)]
    }

    /// Visible groups with their areas, left to right
    pub fn iter(&self) -> impl Iterator<Item = (Group, Area)> + '_ {
        Group::ALL
            .iter()
            .zip(self.areas.iter())
            .filter_map(|(group, area)| area.map(|a| (*group, a)))
    }
}

fn group_index(group: Group) -> usize {
    match group {
        Group::Hour => 0,
        Group::LeftSeparator => 1,
        Group::Minute => 2,
        Group::RightSeparator => 3,
        Group::Second => 4,
    }
}

/// Split `area` into group regions
///
/// The last visible group absorbs any rounding remainder, so the
/// regions always tile the full width.
pub fn layout_groups(area: Area, visibility: &GroupVisibility) -> GroupAreas {
    let mut areas = [None; 5];

    let visible = visibility.visible_groups();
    let total_weight: u32 = visible.iter().map(|g| GROUP_WEIGHTS[group_index(*g)]).sum();
    if total_weight == 0 {
        return GroupAreas { areas };
    }

    let mut x = area.x;
    let mut used = 0u32;
    for (n, group) in visible.iter().enumerate() {
        let i = group_index(*group);
        let width = if n + 1 == visible.len() {
            area.width - used
        } else {
            area.width * GROUP_WEIGHTS[i] / total_weight
        };
        areas[i] = Some(Area::new(x, area.y, width, area.height));
        x += width as i32;
        used += width;
    }

    GroupAreas { areas }
}

/// Convert a layout area to an embedded-graphics rectangle
pub fn to_rectangle(area: &Area) -> Rectangle {
    Rectangle::new(Point::new(area.x, area.y), Size::new(area.width, area.height))
}

/// Convert an embedded-graphics rectangle to a layout area
pub fn from_rectangle(rect: &Rectangle) -> Area {
    Area::new(
        rect.top_left.x,
        rect.top_left.y,
        rect.size.width,
        rect.size.height,
    )
}
