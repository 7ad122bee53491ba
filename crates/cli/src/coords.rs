use anyhow::{bail, Context, Result};
use lineseg::seg2::{pt, Point, Segment};

/// Parse `"x,y"` into a point. Whitespace around either number is allowed.
pub fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected `x,y`, got `{s}`");
    };
    let x: f64 = x.trim().parse().with_context(|| format!("x in `{s}`"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("y in `{s}`"))?;
    if !x.is_finite() || !y.is_finite() {
        bail!("coordinates must be finite, got `{s}`");
    }
    Ok(pt(x, y))
}

pub fn parse_segment(a: &str, b: &str) -> Result<Segment> {
    let a = parse_point(a).context("endpoint a")?;
    let b = parse_point(b).context("endpoint b")?;
    Ok(Segment::new(a, b))
}
