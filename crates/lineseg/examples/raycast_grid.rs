//! Print the per-edge raycast classification of a lattice around a segment.
//!
//! Usage:
//!   cargo run -p lineseg --example raycast_grid -- 1 1 5 5
//!
//! Legend: `+` inside (ray crosses), `*` on the segment, `-` neither.
//! Rows are printed top-down, y from 6 to 0.

use lineseg::prelude::*;

fn main() {
    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    let s = match args.as_slice() {
        [ax, ay, bx, by] => seg(*ax, *ay, *bx, *by),
        _ => {
            eprintln!("usage: raycast_grid AX AY BX BY");
            return;
        }
    };
    println!("segment a=({}, {}) b=({}, {})", s.a.x, s.a.y, s.b.x, s.b.y);
    for y in (0..7).rev() {
        let line: String = (0..7)
            .map(|x| {
                let r = s.raycast(pt(x as f64, y as f64));
                if r.inside {
                    '+'
                } else if r.on {
                    '*'
                } else {
                    '-'
                }
            })
            .collect();
        println!("{line}");
    }
}
