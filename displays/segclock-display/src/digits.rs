//! Two-digit seven-segment group

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};
use segclock_core::geometry::{Area, DigitSlot, PairFit, Polygon, Vertex, SEGMENTS};
use segclock_core::{DigitPattern, DisplayValue};

use crate::layout::to_rectangle;
use crate::style::SegmentStyle;

/// A value drawn as two glyphs side by side
///
/// `None` draws both glyphs fully unlit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPair<'a, C> {
    area: Area,
    value: Option<DisplayValue>,
    inset: u32,
    style: &'a SegmentStyle<C>,
}

impl<'a, C: PixelColor> DigitPair<'a, C> {
    pub fn new(area: Area, value: Option<DisplayValue>, inset: u32, style: &'a SegmentStyle<C>) -> Self {
        Self {
            area,
            value,
            inset,
            style,
        }
    }

    /// Glyph patterns for the tens and ones positions
    pub fn patterns(&self) -> (DigitPattern, DigitPattern) {
        self.value
            .map(DisplayValue::patterns)
            .unwrap_or((DigitPattern::BLANK, DigitPattern::BLANK))
    }

    /// Pixel mapping for this pair, `None` when the area is empty
    pub fn fit(&self) -> Option<PairFit> {
        PairFit::new(&SEGMENTS.bounds(), &self.area, self.inset)
    }
}

impl<C: PixelColor> Drawable for DigitPair<'_, C> {
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let Some(fit) = self.fit() else {
            return Ok(());
        };
        let (tens, ones) = self.patterns();

        // the inset can push glyph edges past the area
        let mut clipped = target.clipped(&to_rectangle(&self.area));
        draw_glyph(&mut clipped, &fit, DigitSlot::Tens, &tens, self.style)?;
        draw_glyph(&mut clipped, &fit, DigitSlot::Ones, &ones, self.style)
    }
}

/// Draw the seven segments of one glyph
pub fn draw_glyph<D, C>(
    target: &mut D,
    fit: &PairFit,
    slot: DigitSlot,
    pattern: &DigitPattern,
    style: &SegmentStyle<C>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    for (segment, polygon) in SEGMENTS.iter() {
        let color = style.color(pattern.is_lit(segment));
        fill_polygon(target, fit, slot, polygon, color)?;
    }
    Ok(())
}

/// Fill a segment polygon as a triangle fan
fn fill_polygon<D, C>(
    target: &mut D,
    fit: &PairFit,
    slot: DigitSlot,
    polygon: &Polygon,
    color: C,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    let style = PrimitiveStyle::with_fill(color);
    for [a, b, c] in polygon.fan() {
        Triangle::new(
            to_point(fit.place(slot, a)),
            to_point(fit.place(slot, b)),
            to_point(fit.place(slot, c)),
        )
        .into_styled(style)
        .draw(target)?;
    }
    Ok(())
}

pub(crate) fn to_point(v: Vertex) -> Point {
    Point::new(v.x, v.y)
}
