//! Fitting a pair of glyphs into a drawing area
//!
//! Two digit positions sit side by side, so the glyph is scaled by
//! `min(width / (2 * bounds_width), height / bounds_height)` and each
//! glyph centre is pushed half a scaled glyph (plus half the inset)
//! away from the middle of the area.

use super::polygon::{Bounds, Vertex};

/// A rectangular drawing area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Area {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Area {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrink by `padding` on every side, saturating at zero size
    pub fn shrink(&self, padding: u32) -> Area {
        let offset = i32::try_from(padding).unwrap_or(i32::MAX);
        Area {
            x: self.x.saturating_add(offset),
            y: self.y.saturating_add(offset),
            width: self.width.saturating_sub(padding.saturating_mul(2)),
            height: self.height.saturating_sub(padding.saturating_mul(2)),
        }
    }

    /// Centre point in (fractional) pixels
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

/// Which of the two digit positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitSlot {
    Tens,
    Ones,
}

/// Scale factor that fits two glyphs of `bounds` side by side in `area`
pub fn pair_scale(bounds: &Bounds, area: &Area) -> f32 {
    let bw = bounds.width().max(1) as f32;
    let bh = bounds.height().max(1) as f32;
    let by_width = area.width as f32 / bw / 2.0;
    let by_height = area.height as f32 / bh;
    by_width.min(by_height)
}

/// Mapping from segment units to pixels for both digit positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairFit {
    scale: f32,
    origin: (f32, f32),
    tens: (f32, f32),
    ones: (f32, f32),
}

impl PairFit {
    /// Fit glyphs of `bounds` into `area`, leaving `inset` pixels between
    /// the two glyphs
    ///
    /// Returns `None` for an empty area.
    pub fn new(bounds: &Bounds, area: &Area, inset: u32) -> Option<Self> {
        if area.is_empty() {
            return None;
        }
        let scale = pair_scale(bounds, area);
        let (cx, cy) = area.center();
        let offset = bounds.width() as f32 * scale / 2.0 + inset as f32 / 2.0;
        let origin = (
            (bounds.min.x + bounds.max.x) as f32 / 2.0,
            (bounds.min.y + bounds.max.y) as f32 / 2.0,
        );
        Some(Self {
            scale,
            origin,
            tens: (cx - offset, cy),
            ones: (cx + offset, cy),
        })
    }

    /// Pixels per segment unit
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Map a vertex of a glyph in `slot` to pixel coordinates
    pub fn place(&self, slot: DigitSlot, v: Vertex) -> Vertex {
        let (gx, gy) = match slot {
            DigitSlot::Tens => self.tens,
            DigitSlot::Ones => self.ones,
        };
        Vertex::new(
            round_px(gx + (v.x as f32 - self.origin.0) * self.scale),
            round_px(gy + (v.y as f32 - self.origin.1) * self.scale),
        )
    }
}

/// Round half away from zero without libm
pub fn round_px(v: f32) -> i32 {
    if v >= 0.0 {
        (v + 0.5) as i32
    } else {
        (v - 0.5) as i32
    }
}
