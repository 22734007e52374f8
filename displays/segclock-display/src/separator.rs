//! Separator marks between digit groups
//!
//! Two marks stacked around the region centre, optionally on a filled
//! background. Circles have a radius of
//! 0.3 of the shorter side; squares have a side of 0.3 of the width. Each
//! mark sits 0.15 of the height above or below the centre.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use segclock_core::config::SeparatorShape;
use segclock_core::geometry::{round_px, Area};

use crate::layout::to_rectangle;

const SIDE_FACTOR: f32 = 0.3;
const INSET_FACTOR: f32 = 0.15;

/// The two marks of one separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator<C> {
    area: Area,
    shape: SeparatorShape,
    color: C,
    background: Option<C>,
}

impl<C: PixelColor> Separator<C> {
    pub fn new(area: Area, shape: SeparatorShape, color: C) -> Self {
        Self {
            area,
            shape,
            color,
            background: None,
        }
    }

    /// Fill the whole region with `background` before drawing the marks
    pub fn with_background(mut self, background: C) -> Self {
        self.background = Some(background);
        self
    }

    /// Centres of the upper and lower marks
    pub fn mark_centers(&self) -> [Point; 2] {
        let (cx, cy) = self.area.center();
        let inset = self.area.height as f32 * INSET_FACTOR;
        [
            Point::new(round_px(cx), round_px(cy - inset)),
            Point::new(round_px(cx), round_px(cy + inset)),
        ]
    }
}

impl<C: PixelColor> Drawable for Separator<C> {
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        if self.area.is_empty() {
            return Ok(());
        }

        if let Some(background) = self.background {
            target.fill_solid(&to_rectangle(&self.area), background)?;
        }

        let style = PrimitiveStyle::with_fill(self.color);
        for center in self.mark_centers() {
            match self.shape {
                SeparatorShape::Circle => {
                    let radius = self.area.width.min(self.area.height) as f32 * SIDE_FACTOR;
                    let diameter = round_px(radius * 2.0) as u32;
                    Circle::with_center(center, diameter)
                        .into_styled(style)
                        .draw(target)?;
                }
                SeparatorShape::Square => {
                    let side = round_px(self.area.width as f32 * SIDE_FACTOR) as u32;
                    Rectangle::with_center(center, Size::new(side, side))
                        .into_styled(style)
                        .draw(target)?;
                }
            }
        }
        Ok(())
    }
}
