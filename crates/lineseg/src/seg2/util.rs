use super::types::{Point, Segment};
use crate::parallelogram_area;

/// Endpoints in lexicographic `(x, y)` order, independent of storage order.
#[inline]
pub(crate) fn canonical(s: &Segment) -> (Point, Point) {
    if (s.b.x, s.b.y) < (s.a.x, s.a.y) {
        (s.b, s.a)
    } else {
        (s.a, s.b)
    }
}

/// Signed area of `(p1 - p0) × (p - p0)` over the canonical endpoints.
/// Positive: `p` is left of the canonical direction; zero: collinear.
///
/// Coordinates near `f64::MAX` overflow the differences or the products; the
/// area is then recomputed on points scaled by 2^-600, which is exact for
/// normal inputs and keeps the sign. Mixing such magnitudes with coordinates
/// below ~1e-130 loses the small ones to underflow.
#[inline]
pub(crate) fn orient(s: &Segment, p: Point) -> f64 {
    let (p0, p1) = canonical(s);
    let area = parallelogram_area(p1 - p0, p - p0);
    if area.is_finite() {
        return area;
    }
    let k = f64::from_bits((1023 - 600) << 52);
    let (p0, p1, p) = (p0 * k, p1 * k, p * k);
    parallelogram_area(p1 - p0, p - p0)
}

/// Strictly opposite signs; a zero on either side does not straddle.
#[inline]
pub(crate) fn straddles(d0: f64, d1: f64) -> bool {
    (d0 > 0.0 && d1 < 0.0) || (d0 < 0.0 && d1 > 0.0)
}

/// Closed 1-D interval overlap, bounds in any order.
#[inline]
pub(crate) fn intervals_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    a0.min(a1) <= b0.max(b1) && b0.min(b1) <= a0.max(a1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seg2::{pt, seg};

    #[test]
    fn canonical_ignores_storage_order() {
        let s = seg(5.0, 1.0, 1.0, 5.0);
        assert_eq!(canonical(&s), canonical(&s.flip()));
        assert_eq!(canonical(&s).0, pt(1.0, 5.0));
        // ties on x fall back to y
        let v = seg(3.0, 5.0, 3.0, 1.0);
        assert_eq!(canonical(&v), (pt(3.0, 1.0), pt(3.0, 5.0)));
    }

    #[test]
    fn orient_bit_identical_under_flip() {
        let s = seg(0.1, 0.7, 0.3, 0.2);
        let p = pt(0.2, 0.45);
        assert_eq!(orient(&s, p).to_bits(), orient(&s.flip(), p).to_bits());
    }

    #[test]
    fn orient_survives_overflowing_coordinates() {
        let m = 1e308;
        let s = seg(m, -m, -m, m);
        assert!(orient(&s, pt(-m, -m)) < 0.0);
        assert!(orient(&s, pt(m, m)) > 0.0);
        assert_eq!(orient(&seg(-m, -m, m, m), pt(0.0, 0.0)), 0.0);
        assert!(orient(&s, pt(f64::NAN, 0.0)).is_nan());
    }

    #[test]
    fn straddle_and_overlap() {
        assert!(straddles(1.0, -2.0));
        assert!(!straddles(0.0, -2.0));
        assert!(!straddles(f64::NAN, -2.0));
        assert!(intervals_overlap(3.0, 1.0, 3.0, 9.0));
        assert!(!intervals_overlap(1.0, 3.0, 5.0, 9.0));
    }
}
