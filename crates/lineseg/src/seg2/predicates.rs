//! Membership and intersection predicates on `Segment`.
//!
//! All tests are evaluated on the canonical endpoint order (see `util::canonical`),
//! so swapping `a` and `b` on either argument never changes a result. Comparisons
//! use cross-product signs on input coordinates; no intersection point is formed.

use super::types::{Point, Rect, Segment};
use super::util::{intervals_overlap, orient, straddles};

impl Segment {
    /// `p` lies on the infinite line through `a` and `b`.
    ///
    /// For a point segment (`a == b`) this is exact equality with `a`.
    pub fn collinear_point(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return p == self.a;
        }
        orient(self, p) == 0.0
    }

    /// `p` lies on the closed segment, endpoints included.
    pub fn contains_point(&self, p: Point) -> bool {
        self.collinear_point(p) && self.rect().contains_point(p)
    }

    /// Both endpoints of `other` lie on this segment.
    pub fn contains_segment(&self, other: Segment) -> bool {
        self.contains_point(other.a) && self.contains_point(other.b)
    }

    /// The two closed segments share at least one point.
    ///
    /// Cases
    /// - point segments reduce to `contains_point`;
    /// - all four endpoints collinear: 1-D overlap on the dominant axis;
    /// - proper crossing: each segment strictly straddles the other's line;
    /// - otherwise only an endpoint lying on the other segment can touch.
    pub fn intersects_segment(&self, other: Segment) -> bool {
        if !self.rect().intersects(&other.rect()) {
            return false;
        }
        if self.is_degenerate() {
            return other.contains_point(self.a);
        }
        if other.is_degenerate() {
            return self.contains_point(other.a);
        }
        let d0 = orient(self, other.a);
        let d1 = orient(self, other.b);
        let d2 = orient(&other, self.a);
        let d3 = orient(&other, self.b);
        if d0 == 0.0 && d1 == 0.0 && d2 == 0.0 && d3 == 0.0 {
            return collinear_overlap(self, &other);
        }
        if straddles(d0, d1) && straddles(d2, d3) {
            return true;
        }
        self.contains_point(other.a)
            || self.contains_point(other.b)
            || other.contains_point(self.a)
            || other.contains_point(self.b)
    }
}

/// Overlap of two collinear, non-degenerate segments.
///
/// Projects onto the axis with the larger spread of the combined extent;
/// ties go to x.
fn collinear_overlap(s: &Segment, t: &Segment) -> bool {
    let (r, q) = (s.rect(), t.rect());
    let span = Rect {
        min: r.min.inf(&q.min),
        max: r.max.sup(&q.max),
    };
    if span.width() >= span.height() {
        intervals_overlap(s.a.x, s.b.x, t.a.x, t.b.x)
    } else {
        intervals_overlap(s.a.y, s.b.y, t.a.y, t.b.y)
    }
}
