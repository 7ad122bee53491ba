//! Curated API surface for callers building polygon and index code.
//!
//! Prefer these re-exports over reaching into `seg2` submodules.

// Value types and constructors
pub use crate::seg2::{pt, seg, Point, RaycastResult, Rect, Segment};
// Ring composition of the per-edge raycast
pub use crate::seg2::raycast_ring;
// Degenerate-heavy sampling for stress tests and benches
pub use crate::seg2::rand::{
    draw_segment, draw_segment_pair, sample_pairs, LatticeCfg, ReplayToken as SegReplay,
};
