//! Segment kernel in 2D: value types and exact predicates.
//!
//! Purpose
//! - Classify points against segments (collinear, contained, raycast) and
//!   decide segment/segment intersection including all degenerate layouts:
//!   collinear overlap, endpoint touching, point segments, axis-aligned edges.
//!
//! Numerics
//! - Orientation is the sign of one cross product over the canonical
//!   (lexicographic) endpoint order, so results do not depend on `a`/`b` order.
//! - No epsilons; derived coordinates are never compared.
//!
//! Code cross-refs: `Segment`, `Rect`, `RaycastResult`, `raycast_ring`

mod predicates;
pub mod rand;
mod raycast;
mod types;
mod util;

pub use raycast::raycast_ring;
pub use types::{pt, seg, Point, RaycastResult, Rect, Segment};
