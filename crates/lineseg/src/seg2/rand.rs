//! Random lattice segments biased towards degenerate layouts.
//!
//! Purpose
//! - Feed property tests, benches and the CLI `fuzz` command with segments whose
//!   integer coordinates make exact collinearity, shared endpoints, point
//!   segments and axis-aligned edges common rather than measure-zero.
//!
//! Model
//! - Coordinates are integers in `[-extent, extent]`, stored as `f64`, so every
//!   cross product is exact.
//! - Collinear partners step along the first segment's primitive direction
//!   `d / gcd(d)`, which keeps them on the lattice and exactly on the line.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::{pt, Point, Segment};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lattice sampler configuration. Probabilities are clamped to [0, 1].
#[derive(Clone, Copy, Debug)]
pub struct LatticeCfg {
    /// Coordinates are drawn from the integer range `[-extent, extent]`. Must be >= 1.
    pub extent: i32,
    /// Probability of a zero-length segment.
    pub degenerate_prob: f64,
    /// Probability of a horizontal or vertical segment.
    pub axis_prob: f64,
    /// Probability that the second segment of a pair lies on the first's line.
    pub collinear_prob: f64,
    /// Probability that the second segment of a pair reuses an endpoint of the first.
    pub shared_endpoint_prob: f64,
}

impl Default for LatticeCfg {
    fn default() -> Self {
        Self {
            extent: 8,
            degenerate_prob: 0.05,
            axis_prob: 0.2,
            collinear_prob: 0.25,
            shared_endpoint_prob: 0.15,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one lattice segment. `None` if `cfg.extent < 1`.
pub fn draw_segment(cfg: LatticeCfg, tok: ReplayToken) -> Option<Segment> {
    if cfg.extent < 1 {
        return None;
    }
    let mut rng = tok.to_std_rng();
    Some(free_segment(&cfg, &mut rng))
}

/// Draw a pair of lattice segments, the second often built from the first.
/// `None` if `cfg.extent < 1`.
pub fn draw_segment_pair(cfg: LatticeCfg, tok: ReplayToken) -> Option<(Segment, Segment)> {
    if cfg.extent < 1 {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let s = free_segment(&cfg, &mut rng);
    let t = if !s.is_degenerate() && rng.gen_bool(clamp01(cfg.collinear_prob)) {
        collinear_partner(&s, &mut rng)
    } else if rng.gen_bool(clamp01(cfg.shared_endpoint_prob)) {
        let anchor = if rng.gen_bool(0.5) { s.a } else { s.b };
        let other = lattice_point(cfg.extent, &mut rng);
        if rng.gen_bool(0.5) {
            Segment::new(anchor, other)
        } else {
            Segment::new(other, anchor)
        }
    } else {
        free_segment(&cfg, &mut rng)
    };
    Some((s, t))
}

/// `count` consecutive pairs for tokens `(seed, 0..count)`.
pub fn sample_pairs(cfg: LatticeCfg, seed: u64, count: usize) -> Option<Vec<(Segment, Segment)>> {
    (0..count as u64)
        .map(|index| draw_segment_pair(cfg, ReplayToken { seed, index }))
        .collect()
}

#[inline]
fn clamp01(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

fn lattice_point<R: Rng>(extent: i32, rng: &mut R) -> Point {
    pt(
        rng.gen_range(-extent..=extent) as f64,
        rng.gen_range(-extent..=extent) as f64,
    )
}

fn free_segment<R: Rng>(cfg: &LatticeCfg, rng: &mut R) -> Segment {
    let a = lattice_point(cfg.extent, rng);
    if rng.gen_bool(clamp01(cfg.degenerate_prob)) {
        return Segment::new(a, a);
    }
    let mut b = lattice_point(cfg.extent, rng);
    if rng.gen_bool(clamp01(cfg.axis_prob)) {
        if rng.gen_bool(0.5) {
            b.y = a.y;
        } else {
            b.x = a.x;
        }
    }
    Segment::new(a, b)
}

/// Segment on the line through `s` (non-degenerate), endpoints at lattice
/// steps from `s.a` within roughly one extra length on either side.
fn collinear_partner<R: Rng>(s: &Segment, rng: &mut R) -> Segment {
    let dx = (s.b.x - s.a.x) as i64;
    let dy = (s.b.y - s.a.y) as i64;
    let g = gcd(dx.unsigned_abs(), dy.unsigned_abs()).max(1) as i64;
    let step = pt((dx / g) as f64, (dy / g) as f64);
    let mut at = || s.a + step * rng.gen_range(-g..=2 * g) as f64;
    let a = at();
    let b = at();
    Segment::new(a, b)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
