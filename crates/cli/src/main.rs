use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lineseg::seg2::rand::{sample_pairs, LatticeCfg};
use lineseg::seg2::{Point, Segment};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod coords;
mod report;

use coords::{parse_point, parse_segment};
use report::{emit, Report};

#[derive(Parser)]
#[command(name = "lineseg")]
#[command(about = "Evaluate segment predicates from the command line")]
struct Cmd {
    /// Also write the JSON report to this path
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify a point against one edge for even-odd containment
    Raycast {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        #[arg(long, allow_hyphen_values = true)]
        p: String,
    },
    /// Decide whether segments a-b and c-d share a point
    Intersects {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        #[arg(long, allow_hyphen_values = true)]
        c: String,
        #[arg(long, allow_hyphen_values = true)]
        d: String,
    },
    /// Collinearity and containment of a point
    Contains {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        #[arg(long, allow_hyphen_values = true)]
        p: String,
    },
    /// Bounding box of a segment
    Rect {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
    },
    /// Translate a segment
    Move {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        #[arg(long, allow_hyphen_values = true)]
        dx: f64,
        #[arg(long, allow_hyphen_values = true)]
        dy: f64,
    },
    /// Sample lattice segment pairs and check direction invariance
    Fuzz {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10_000)]
        count: usize,
        #[arg(long, default_value_t = 8)]
        extent: i32,
    },
    /// Print version and code revision
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let report = match cmd.action {
        Action::Raycast { a, b, p } => raycast(&a, &b, &p)?,
        Action::Intersects { a, b, c, d } => intersects(&a, &b, &c, &d)?,
        Action::Contains { a, b, p } => contains(&a, &b, &p)?,
        Action::Rect { a, b } => rect(&a, &b)?,
        Action::Move { a, b, dx, dy } => move_by(&a, &b, dx, dy)?,
        Action::Fuzz {
            seed,
            count,
            extent,
        } => fuzz(seed, count, extent)?,
        Action::Report => Report::new("report", json!({}), json!(null)),
    };
    emit(&report, cmd.out.as_deref())
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

fn seg_json(s: &Segment) -> serde_json::Value {
    json!({ "a": xy(s.a), "b": xy(s.b) })
}

fn raycast(a: &str, b: &str, p: &str) -> Result<Report> {
    let s = parse_segment(a, b)?;
    let p = parse_point(p)?;
    let r = s.raycast(p);
    tracing::info!(on = r.on, inside = r.inside, "raycast");
    Ok(Report::new(
        "raycast",
        json!({ "segment": seg_json(&s), "p": xy(p) }),
        json!({ "on": r.on, "in": r.inside }),
    ))
}

fn intersects(a: &str, b: &str, c: &str, d: &str) -> Result<Report> {
    let s = parse_segment(a, b)?;
    let t = parse_segment(c, d)?;
    let hit = s.intersects_segment(t);
    tracing::info!(hit, "intersects");
    Ok(Report::new(
        "intersects",
        json!({ "first": seg_json(&s), "second": seg_json(&t) }),
        json!({ "intersects": hit }),
    ))
}

fn contains(a: &str, b: &str, p: &str) -> Result<Report> {
    let s = parse_segment(a, b)?;
    let p = parse_point(p)?;
    let collinear = s.collinear_point(p);
    let contained = s.contains_point(p);
    tracing::info!(collinear, contained, "contains");
    Ok(Report::new(
        "contains",
        json!({ "segment": seg_json(&s), "p": xy(p) }),
        json!({ "collinear": collinear, "contains": contained }),
    ))
}

fn rect(a: &str, b: &str) -> Result<Report> {
    let s = parse_segment(a, b)?;
    let r = s.rect();
    tracing::info!(width = r.width(), height = r.height(), "rect");
    Ok(Report::new(
        "rect",
        json!({ "segment": seg_json(&s) }),
        json!({ "min": xy(r.min), "max": xy(r.max) }),
    ))
}

fn move_by(a: &str, b: &str, dx: f64, dy: f64) -> Result<Report> {
    if !dx.is_finite() || !dy.is_finite() {
        bail!("translation must be finite, got dx={dx} dy={dy}");
    }
    let s = parse_segment(a, b)?;
    let m = s.move_by(dx, dy);
    tracing::info!(dx, dy, "move");
    Ok(Report::new(
        "move",
        json!({ "segment": seg_json(&s), "dx": dx, "dy": dy }),
        seg_json(&m),
    ))
}

/// Counts of a fuzz run; `violations` must stay zero.
#[derive(Debug, Default, serde::Serialize)]
struct FuzzSummary {
    pairs: usize,
    intersecting: usize,
    degenerate: usize,
    violations: usize,
}

fn fuzz(seed: u64, count: usize, extent: i32) -> Result<Report> {
    tracing::info!(seed, count, extent, "fuzz");
    let cfg = LatticeCfg {
        extent,
        ..LatticeCfg::default()
    };
    let Some(pairs) = sample_pairs(cfg, seed, count) else {
        bail!("lattice extent must be >= 1, got {extent}");
    };
    let mut summary = FuzzSummary {
        pairs: pairs.len(),
        ..FuzzSummary::default()
    };
    for (s, t) in &pairs {
        let hit = s.intersects_segment(*t);
        summary.intersecting += hit as usize;
        summary.degenerate += (s.is_degenerate() || t.is_degenerate()) as usize;
        let consistent = s.flip().intersects_segment(*t) == hit
            && s.intersects_segment(t.flip()) == hit
            && s.flip().intersects_segment(t.flip()) == hit
            && t.intersects_segment(*s) == hit;
        if !consistent {
            summary.violations += 1;
            tracing::warn!(?s, ?t, "direction_invariance_violated");
        }
    }
    tracing::info!(
        intersecting = summary.intersecting,
        violations = summary.violations,
        "fuzz_done"
    );
    if summary.violations > 0 {
        bail!("{} pairs violated direction invariance", summary.violations);
    }
    Ok(Report::new(
        "fuzz",
        json!({ "seed": seed, "count": count, "extent": extent }),
        serde_json::to_value(&summary)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raycast_report_fields() {
        let r = raycast("3,1", "3,5", "2,4").unwrap();
        assert_eq!(r.result["in"], true);
        assert_eq!(r.result["on"], false);
    }

    #[test]
    fn move_and_rect_reports() {
        let m = move_by("10,11", "12,13", 10.0, 20.0).unwrap();
        assert_eq!(m.result["a"][1], 31.0);
        assert_eq!(m.result["b"][0], 22.0);
        let r = rect("12,13", "11,12").unwrap();
        assert_eq!(r.result["min"][0], 11.0);
        assert_eq!(r.result["max"][1], 13.0);
    }

    #[test]
    fn move_rejects_non_finite_translation() {
        assert!(move_by("0,0", "1,1", f64::INFINITY, 0.0).is_err());
        assert!(move_by("0,0", "1,1", 0.0, f64::NAN).is_err());
        let cmd = Cmd::try_parse_from([
            "lineseg", "move", "--a", "0,0", "--b", "1,1", "--dx", "inf", "--dy", "0",
        ])
        .unwrap();
        match cmd.action {
            Action::Move { a, b, dx, dy } => assert!(move_by(&a, &b, dx, dy).is_err()),
            _ => panic!("expected move"),
        }
    }

    #[test]
    fn fuzz_small_run_is_consistent() {
        let r = fuzz(7, 500, 6).unwrap();
        assert_eq!(r.result["pairs"], 500);
        assert_eq!(r.result["violations"], 0);
        assert!(fuzz(7, 10, 0).is_err());
    }

    #[test]
    fn cli_parses_negative_coordinates() {
        let cmd = Cmd::try_parse_from([
            "lineseg", "intersects", "--a", "-1,-1", "--b", "1,1", "--c", "-1,1", "--d", "1,-1",
        ])
        .unwrap();
        match cmd.action {
            Action::Intersects { a, b, c, d } => {
                let r = intersects(&a, &b, &c, &d).unwrap();
                assert_eq!(r.result["intersects"], true);
            }
            _ => panic!("expected intersects"),
        }
    }
}
