//! Timer screen state
//!
//! Holds the latest countdown snapshot and draws the whole five-group
//! frame onto a draw target.

use embedded_graphics::prelude::*;
use segclock_core::countdown::{Group, Snapshot};
use segclock_core::DisplayValue;

use crate::digits::DigitPair;
use crate::error::RenderError;
use crate::layout::{from_rectangle, layout_groups};
use crate::separator::Separator;
use crate::style::{PaletteColor, TimerStyle};

/// Screen state for the countdown display
#[derive(Debug, Clone)]
pub struct TimerScreen<C> {
    snapshot: Snapshot,
    style: TimerStyle<C>,
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl<C: PaletteColor> TimerScreen<C> {
    /// Create a blank screen
    pub const fn new(style: TimerStyle<C>) -> Self {
        Self {
            snapshot: Snapshot::BLANK,
            style,
            dirty: true,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn style(&self) -> &TimerStyle<C> {
        &self.style
    }

    /// Show a new snapshot; marks dirty only if something changed
    pub fn set_snapshot(&mut self, snapshot: Snapshot) {
        if self.snapshot != snapshot {
            self.snapshot = snapshot;
            self.dirty = true;
        }
    }

    pub fn set_style(&mut self, style: TimerStyle<C>) {
        self.style = style;
        self.dirty = true;
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Draw the full frame over the target's bounding box
    ///
    /// Counters are validated before anything is drawn, so an invalid
    /// value leaves the target untouched.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), RenderError<D::Error>>
    where
        D: DrawTarget<Color = C>,
    {
        let values = if self.snapshot.is_blank() {
            None
        } else {
            Some(self.snapshot.values()?)
        };
        let value = |i: usize| values.map(|v: [DisplayValue; 3]| v[i]);

        target
            .clear(self.style.background)
            .map_err(RenderError::Display)?;

        let area = from_rectangle(&target.bounding_box());
        let areas = layout_groups(area, &self.snapshot.visibility);
        let padding = self.style.digit_padding;
        let inset = self.style.digit_inset;

        for (group, region) in areas.iter() {
            let result = match group {
                Group::Hour => {
                    DigitPair::new(region.shrink(padding), value(0), inset, &self.style.segments)
                        .draw(target)
                }
                Group::Minute => {
                    DigitPair::new(region.shrink(padding), value(1), inset, &self.style.segments)
                        .draw(target)
                }
                Group::Second => {
                    DigitPair::new(region.shrink(padding), value(2), inset, &self.style.segments)
                        .draw(target)
                }
                Group::LeftSeparator | Group::RightSeparator => {
                    Separator::new(region, self.style.separator_shape, self.style.separator)
                        .with_background(self.style.separator_background)
                        .draw(target)
                }
            };
            result.map_err(RenderError::Display)?;
        }

        Ok(())
    }
}

impl<C: PaletteColor> Default for TimerScreen<C> {
    fn default() -> Self {
        Self::new(TimerStyle::default())
    }
}
