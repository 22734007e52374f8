//! The seven light-tube polygons of a glyph
//!
//! One canonical tube is built at the origin and every segment is a
//! rigid transform of it. The default table is evaluated at compile
//! time into [`SEGMENTS`], so it is built exactly once and can be read
//! from any number of render passes without synchronization.

use super::polygon::{Bounds, Polygon, Transform, Vertex};
use crate::glyph::{Segment, SEGMENT_COUNT};

/// Dimensions of one light tube, in segment units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TubeGeometry {
    /// Tube thickness
    pub width: i32,
    /// Length of the rectangular body, excluding the pointed ends
    pub base_length: i32,
    /// Gap between line-adjacent tubes
    pub gap: i32,
}

impl TubeGeometry {
    /// Geometry of the stock glyph
    pub const DEFAULT: TubeGeometry = TubeGeometry {
        width: 4,
        base_length: 10,
        gap: 1,
    };

    /// Height of each triangular end; half the width keeps it isosceles
    pub const fn peak(&self) -> i32 {
        self.width / 2
    }

    /// Full tube length, tip to tip
    pub const fn length(&self) -> i32 {
        self.base_length + self.peak() * 2
    }

    /// The upright base hexagon centred at the origin
    ///
    /// Vertices run top point, upper-left, lower-left, bottom point,
    /// lower-right, upper-right.
    pub const fn base(&self) -> Polygon {
        let half_w = self.width / 2;
        let half_h = self.length() / 2;
        let shoulder = half_h - self.peak();
        Polygon::new([
            Vertex::new(0, -half_h),
            Vertex::new(-half_w, -shoulder),
            Vertex::new(-half_w, shoulder),
            Vertex::new(0, half_h),
            Vertex::new(half_w, shoulder),
            Vertex::new(half_w, -shoulder),
        ])
    }

    /// The canonical tube: the base turned a quarter, lying flat
    pub const fn canonical(&self) -> Polygon {
        self.base().transformed(&Transform::rotate(1))
    }

    /// Placement of a segment relative to the canonical tube
    pub const fn placement(&self, segment: Segment) -> Transform {
        let h = self.length();
        let g = self.gap;
        let corner = h / 2 + g;
        match segment {
            Segment::LeftTop => Transform::rotate_then_translate(1, -corner, -corner),
            Segment::LeftBottom => Transform::rotate_then_translate(1, -corner, corner),
            Segment::CenterTop => Transform::translate(0, -(h + g * 2)),
            Segment::CenterCenter => Transform::IDENTITY,
            Segment::CenterBottom => Transform::translate(0, h + g * 2),
            Segment::RightTop => Transform::rotate_then_translate(1, corner, -corner),
            Segment::RightBottom => Transform::rotate_then_translate(1, corner, corner),
        }
    }
}

/// The seven segment polygons and their union bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentTable {
    polygons: [Polygon; SEGMENT_COUNT],
    bounds: Bounds,
}

impl SegmentTable {
    /// Build all seven polygons for a tube geometry
    pub const fn build(geometry: TubeGeometry) -> Self {
        let canonical = geometry.canonical();
        let mut polygons = [canonical; SEGMENT_COUNT];
        let mut bounds = canonical.bounds();
        let mut i = 0;
        while i < SEGMENT_COUNT {
            polygons[i] = canonical.transformed(&geometry.placement(Segment::ALL[i]));
            bounds = bounds.union(&polygons[i].bounds());
            i += 1;
        }
        Self { polygons, bounds }
    }

    /// Polygon for one segment
    pub const fn polygon(&self, segment: Segment) -> &Polygon {
        &self.polygons[segment.index()]
    }

    /// Union bounding box of all seven polygons
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Iterate `(segment, polygon)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (Segment, &Polygon)> + '_ {
        Segment::ALL.iter().map(move |&s| (s, self.polygon(s)))
    }
}

/// Default segment table, built at compile time
pub static SEGMENTS: SegmentTable = SegmentTable::build(TubeGeometry::DEFAULT);

/// Build the default segment table
///
/// Deterministic: every call yields a table equal to [`SEGMENTS`].
pub const fn build_segments() -> SegmentTable {
    SegmentTable::build(TubeGeometry::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tube_shape() {
        let base = TubeGeometry::DEFAULT.base();
        let b = base.bounds();
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 14);
        // rectangle 4x10 plus two triangles of base 4, height 2
        assert_eq!(base.doubled_area().abs(), 2 * (40 + 4 + 4));
    }

    #[test]
    fn test_canonical_tube_is_horizontal() {
        let b = TubeGeometry::DEFAULT.canonical().bounds();
        assert_eq!(b.width(), 14);
        assert_eq!(b.height(), 4);
        assert_eq!(b.center(), Vertex::ORIGIN);
    }

    #[test]
    fn test_horizontal_segments_are_stacked() {
        let table = build_segments();
        let top = table.polygon(Segment::CenterTop).bounds();
        let mid = table.polygon(Segment::CenterCenter).bounds();
        let bottom = table.polygon(Segment::CenterBottom).bounds();
        assert_eq!(top.center(), Vertex::new(0, -16));
        assert_eq!(mid.center(), Vertex::ORIGIN);
        assert_eq!(bottom.center(), Vertex::new(0, 16));
        for b in [top, mid, bottom] {
            assert_eq!((b.width(), b.height()), (14, 4));
        }
    }

    #[test]
    fn test_corner_segments_are_upright() {
        let table = build_segments();
        let expected = [
            (Segment::LeftTop, Vertex::new(-8, -8)),
            (Segment::LeftBottom, Vertex::new(-8, 8)),
            (Segment::RightTop, Vertex::new(8, -8)),
            (Segment::RightBottom, Vertex::new(8, 8)),
        ];
        for (segment, center) in expected {
            let b = table.polygon(segment).bounds();
            assert_eq!(b.center(), center, "{:?}", segment);
            assert_eq!((b.width(), b.height()), (4, 14));
        }
    }

    #[test]
    fn test_union_bounds() {
        let b = SEGMENTS.bounds();
        assert_eq!(b.min, Vertex::new(-10, -18));
        assert_eq!(b.max, Vertex::new(10, 18));
        assert_eq!(b.center(), Vertex::ORIGIN);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_segments(), build_segments());
        assert_eq!(build_segments(), SEGMENTS);
    }

    #[test]
    fn test_tubes_do_not_share_vertices() {
        let table = build_segments();
        for (a, pa) in table.iter() {
            for (b, pb) in table.iter() {
                if a == b {
                    continue;
                }
                for v in pa.vertices() {
                    assert!(!pb.vertices().contains(v), "{:?} touches {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_scaled_geometry() {
        let wide = TubeGeometry {
            width: 8,
            base_length: 20,
            gap: 2,
        };
        let b = SegmentTable::build(wide).bounds();
        assert_eq!((b.width(), b.height()), (40, 72));
    }
}
