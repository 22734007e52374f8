//! Integer polygon primitives
//!
//! Coordinates use the screen convention: x grows to the right and y
//! grows downward. All segment geometry is built from integer constants
//! and quarter-turn rotations, so it stays exact and can be evaluated at
//! compile time.

/// Number of vertices in one light tube
pub const TUBE_VERTICES: usize = 6;

/// A point in segment units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    /// The shared origin
    pub const ORIGIN: Vertex = Vertex::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotate 90 degrees clockwise (on screen) around the origin
    pub const fn rotate_quarter(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

/// Rigid transform: rotate by whole quarter turns, then translate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transform {
    /// Quarter turns applied first (taken modulo 4)
    pub quarter_turns: u8,
    /// Horizontal offset applied after rotation
    pub dx: i32,
    /// Vertical offset applied after rotation
    pub dy: i32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform::translate(0, 0);

    /// Pure translation
    pub const fn translate(dx: i32, dy: i32) -> Self {
        Self {
            quarter_turns: 0,
            dx,
            dy,
        }
    }

    /// Pure rotation by `quarter_turns` x 90 degrees
    pub const fn rotate(quarter_turns: u8) -> Self {
        Self {
            quarter_turns,
            dx: 0,
            dy: 0,
        }
    }

    /// Quarter turn followed by a translation
    pub const fn rotate_then_translate(quarter_turns: u8, dx: i32, dy: i32) -> Self {
        Self {
            quarter_turns,
            dx,
            dy,
        }
    }

    /// Apply to a single vertex
    pub const fn apply(&self, v: Vertex) -> Vertex {
        let mut out = v;
        let mut turns = self.quarter_turns % 4;
        while turns > 0 {
            out = out.rotate_quarter();
            turns -= 1;
        }
        Vertex::new(out.x + self.dx, out.y + self.dy)
    }
}

/// Axis-aligned bounding box, inclusive of its edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub min: Vertex,
    pub max: Vertex,
}

impl Bounds {
    pub const fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub const fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Centre of the box (rounded toward negative infinity)
    pub const fn center(&self) -> Vertex {
        Vertex::new(
            (self.min.x + self.max.x).div_euclid(2),
            (self.min.y + self.max.y).div_euclid(2),
        )
    }

    /// Smallest box containing both
    pub const fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: Vertex::new(min(self.min.x, other.min.x), min(self.min.y, other.min.y)),
            max: Vertex::new(max(self.max.x, other.max.x), max(self.max.y, other.max.y)),
        }
    }
}

/// A closed convex polygon with the vertex count of one light tube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Polygon {
    vertices: [Vertex; TUBE_VERTICES],
}

impl Polygon {
    pub const fn new(vertices: [Vertex; TUBE_VERTICES]) -> Self {
        Self { vertices }
    }

    /// Vertices in drawing order; the path closes back to the first one
    pub const fn vertices(&self) -> &[Vertex; TUBE_VERTICES] {
        &self.vertices
    }

    /// Copy of this polygon with `t` applied to every vertex
    pub const fn transformed(&self, t: &Transform) -> Polygon {
        let mut out = [Vertex::ORIGIN; TUBE_VERTICES];
        let mut i = 0;
        while i < TUBE_VERTICES {
            out[i] = t.apply(self.vertices[i]);
            i += 1;
        }
        Polygon::new(out)
    }

    /// Bounding box of the vertices
    pub const fn bounds(&self) -> Bounds {
        let first = self.vertices[0];
        let mut b = Bounds {
            min: first,
            max: first,
        };
        let mut i = 1;
        while i < TUBE_VERTICES {
            let v = self.vertices[i];
            b = b.union(&Bounds { min: v, max: v });
            i += 1;
        }
        b
    }

    /// Triangle fan covering the polygon, anchored at the first vertex
    ///
    /// Valid because every tube is convex.
    pub fn fan(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        let v = &self.vertices;
        (1..TUBE_VERTICES - 1).map(move |i| [v[0], v[i], v[i + 1]])
    }

    /// Twice the signed area (shoelace formula)
    #[cfg(test)]
    pub(crate) fn doubled_area(&self) -> i32 {
        let v = &self.vertices;
        (0..TUBE_VERTICES)
            .map(|i| {
                let a = v[i];
                let b = v[(i + 1) % TUBE_VERTICES];
                a.x * b.y - b.x * a.y
            })
            .sum()
    }
}

const fn min(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

const fn max(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}
