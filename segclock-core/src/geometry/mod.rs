//! Segment geometry engine
//!
//! Builds the seven light-tube polygons of a glyph and fits pairs of
//! glyphs into pixel areas.

pub mod fit;
pub mod polygon;
pub mod segments;

pub use fit::{pair_scale, round_px, Area, DigitSlot, PairFit};
pub use polygon::{Bounds, Polygon, Transform, Vertex};
pub use segments::{build_segments, SegmentTable, TubeGeometry, SEGMENTS};
