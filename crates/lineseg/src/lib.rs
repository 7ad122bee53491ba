//! Exact 2D line-segment predicates.
//!
//! Point/segment membership, segment intersection, and the per-edge raycast
//! used by even-odd polygon containment. Every predicate is a pure O(1)
//! function of its inputs and is invariant under swapping a segment's endpoints.
//!
//! API Policy
//! - `seg2` is the implementation; `api` and `prelude` are curated re-exports.
//! - Coordinates are `f64`; no tolerances. NaN input yields `false`, never a panic.

pub mod api;
pub mod seg2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use seg2::{Point, RaycastResult, Rect, Segment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::seg2::rand::{draw_segment, draw_segment_pair, LatticeCfg, ReplayToken};
    pub use crate::seg2::{pt, raycast_ring, seg, Point, RaycastResult, Rect, Segment};
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise, zero when parallel.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert_eq!(parallelogram_area(a, b), 2.5);
        assert_eq!(parallelogram_area(b, a), -2.5);
    }

    #[test]
    fn area_zero_for_parallel_lattice_vectors() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = Vec2::new(rng.gen_range(-50..50) as f64, rng.gen_range(-50..50) as f64);
            let k = rng.gen_range(-4..=4) as f64;
            assert_eq!(parallelogram_area(a, a * k), 0.0);
        }
    }
}
