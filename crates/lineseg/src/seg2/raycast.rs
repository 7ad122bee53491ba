//! Per-edge raycast for even-odd point-in-polygon, and its composition over a ring.
//!
//! Half-open rule
//! - An edge takes part in the crossing count only for `low.y <= p.y < high.y`,
//!   with endpoints ordered by y (not by storage order). A vertex shared by two
//!   ring edges is therefore counted exactly once.
//! - Horizontal and point segments never cross; they can only report `on`.
//!
//! Code cross-refs: `types::RaycastResult`, `predicates::contains_point`

use super::types::{Point, RaycastResult, Segment};
use super::util::{canonical, orient};

impl Segment {
    /// Classify `p` against this edge for a ray cast towards +x.
    ///
    /// `inside` is `p.x < x_at(p.y)` where `x_at` interpolates the edge, evaluated
    /// as the side of `p` relative to the edge directed low-y → high-y. A point on
    /// the edge reports `on` and never `inside`.
    pub fn raycast(&self, p: Point) -> RaycastResult {
        if self.contains_point(p) {
            return RaycastResult {
                on: true,
                inside: false,
            };
        }
        let (lo, hi) = if self.a.y <= self.b.y {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };
        if !(lo.y < hi.y) || p.y < lo.y || p.y >= hi.y {
            return RaycastResult::default();
        }
        let side = orient(self, p);
        let upward = canonical(self).0 == lo;
        RaycastResult {
            on: false,
            inside: if upward { side > 0.0 } else { side < 0.0 },
        }
    }
}

/// Even-odd classification of `p` against a closed ring of vertices.
///
/// The closing edge `last → first` is implied. `on` wins: a boundary point
/// reports `inside == false`. Fewer than two vertices yield the default result
/// unless `p` equals the single vertex.
pub fn raycast_ring(ring: &[Point], p: Point) -> RaycastResult {
    let n = ring.len();
    let mut out = RaycastResult::default();
    for i in 0..n {
        let edge = Segment::new(ring[i], ring[(i + 1) % n]);
        let r = edge.raycast(p);
        if r.on {
            return RaycastResult {
                on: true,
                inside: false,
            };
        }
        out.inside ^= r.inside;
    }
    out
}
