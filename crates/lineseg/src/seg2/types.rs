//! Value types of the segment kernel: points, bounding boxes, segments.
//!
//! - `Point`: nalgebra column vector, exact component-wise equality.
//! - `Rect`: closed axis-aligned box, always normalized (`min <= max` per axis).
//! - `Segment`: ordered endpoint pair `(a, b)`; zero-length segments are legal.
//! - `RaycastResult`: per-edge `on`/`inside` flags for even-odd containment.
//!
//! Code cross-refs: `predicates`, `raycast`, `util::canonical`

use nalgebra::Vector2;

/// A 2D coordinate. Finite coordinates expected; NaN propagates to `false`.
pub type Point = Vector2<f64>;

/// Shorthand constructor for a `Point`.
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Closed axis-aligned bounding box.
///
/// Invariants:
/// - `min.x <= max.x` and `min.y <= max.y` (for finite input).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Box spanned by two corners in any order.
    #[inline]
    pub fn from_corners(p: Point, q: Point) -> Self {
        Self {
            min: pt(p.x.min(q.x), p.y.min(q.y)),
            max: pt(p.x.max(q.x), p.y.max(q.y)),
        }
    }

    /// Closed membership: points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Closed overlap test; boxes sharing only an edge or a corner intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Line segment from `a` to `b`.
///
/// Invariants:
/// - None on the endpoints; `a == b` is a valid point segment.
/// - Every predicate gives the same answer for `flip()`ed input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

/// Shorthand constructor from raw coordinates.
#[inline]
pub fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
    Segment::new(pt(ax, ay), pt(bx, by))
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Same segment traversed in the opposite direction.
    #[inline]
    pub fn flip(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Translate both endpoints by `(dx, dy)`; `a`/`b` keep their roles.
    #[inline]
    pub fn move_by(&self, dx: f64, dy: f64) -> Self {
        let d = pt(dx, dy);
        Self {
            a: self.a + d,
            b: self.b + d,
        }
    }

    /// Bounding box of the two endpoints.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.a, self.b)
    }
}

/// Classification of a point against one edge for crossing-parity tests.
///
/// `on`: the point lies on the closed segment.
/// `inside`: a ray from the point towards +x crosses the edge under the
/// half-open rule (low-y endpoint included, high-y endpoint excluded).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RaycastResult {
    pub on: bool,
    pub inside: bool,
}
