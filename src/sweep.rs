//! Sweep-line descriptors and the boundary scanner.
//!
//! A sweep line is a single row, column, or diagonal of the mask. The
//! scanner walks it in scan order and reports the extreme foreground
//! pixels, from which the sub-pixel midpoint is derived. Diagonals come in
//! two families: constant `x + y = k` ("sum", top-left to bottom-right
//! normals) and constant `x - y = k` ("diff").
//!
//! Finding nothing on a line is an expected outcome while the sweep has
//! not yet reached the shape; it is reported as `None`, not an error.
use crate::mask::Mask;
use nalgebra::Point2;
use serde::Serialize;

/// Scan order along a sweep line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Low x (or y) first.
    Forward,
    /// High x (or y) first.
    Reverse,
}

/// A concrete line across the mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SweepLine {
    Row { y: usize, dir: Direction },
    Column { x: usize, dir: Direction },
    /// Diagonal family `x + y = k`.
    DiagSum { k: usize, dir: Direction },
    /// Diagonal family `x - y = k`; `k` may be negative.
    DiagDiff { k: isize, dir: Direction },
}

/// Extreme foreground pixels on a sweep line, in scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineHit {
    pub first: (usize, usize),
    pub last: (usize, usize),
}

impl LineHit {
    /// Per-coordinate midpoint `first + (last - first) / 2`.
    pub fn midpoint(&self) -> Point2<f32> {
        let fx = self.first.0 as f32;
        let fy = self.first.1 as f32;
        let lx = self.last.0 as f32;
        let ly = self.last.1 as f32;
        Point2::new(fx + (lx - fx) / 2.0, fy + (ly - fy) / 2.0)
    }
}

/// Locate the extreme foreground pixels along `line`, or `None` when the
/// line holds no foreground at all.
pub fn scan_line(mask: &Mask, line: SweepLine) -> Option<LineHit> {
    if mask.w == 0 || mask.h == 0 {
        return None;
    }
    let (lo, hi, dir) = match line {
        SweepLine::Row { y, dir } => {
            if y >= mask.h {
                return None;
            }
            let lo = (0..mask.w).find(|&x| mask.get(x, y))?;
            let hi = (lo..mask.w).rev().find(|&x| mask.get(x, y))?;
            ((lo, y), (hi, y), dir)
        }
        SweepLine::Column { x, dir } => {
            if x >= mask.w {
                return None;
            }
            let lo = (0..mask.h).find(|&y| mask.get(x, y))?;
            let hi = (lo..mask.h).rev().find(|&y| mask.get(x, y))?;
            ((x, lo), (x, hi), dir)
        }
        SweepLine::DiagSum { k, dir } => {
            // x from max(0, k - h + 1) to min(k, w - 1), y = k - x
            let x_min = k.saturating_sub(mask.h - 1);
            let x_max = k.min(mask.w - 1);
            if x_min > x_max {
                return None;
            }
            let lo = (x_min..=x_max).find(|&x| mask.get(x, k - x))?;
            let hi = (lo..=x_max).rev().find(|&x| mask.get(x, k - x))?;
            ((lo, k - lo), (hi, k - hi), dir)
        }
        SweepLine::DiagDiff { k, dir } => {
            // y = x - k, kept while 0 <= y < h
            let x_min = k.max(0) as usize;
            let x_max_signed = (mask.h as isize - 1) + k;
            if x_max_signed < 0 || x_min >= mask.w {
                return None;
            }
            let x_max = (x_max_signed as usize).min(mask.w - 1);
            let y_of = |x: usize| (x as isize - k) as usize;
            let lo = (x_min..=x_max).find(|&x| mask.get(x, y_of(x)))?;
            let hi = (lo..=x_max).rev().find(|&x| mask.get(x, y_of(x)))?;
            ((lo, y_of(lo)), (hi, y_of(hi)), dir)
        }
    };
    Some(match dir {
        Direction::Forward => LineHit {
            first: lo,
            last: hi,
        },
        Direction::Reverse => LineHit {
            first: hi,
            last: lo,
        },
    })
}
