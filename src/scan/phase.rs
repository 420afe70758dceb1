//! Sweep phases and the phase-indexed transition table.
//!
//! The eight phases run in a fixed order, two per diameter axis. Each
//! phase maps a normalized progress value onto a concrete sweep line and
//! knows which endpoint slot it fills and which axis it closes. Keeping
//! resolver, slot, and successor on the phase itself makes the transition
//! table testable without driving a whole scan.
use crate::score::DiameterAxis;
use crate::sweep::{Direction, SweepLine};
use serde::Serialize;

/// The scan sequence. `Completed` is terminal; transitions never regress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScanPhase {
    TopDown,
    BottomUp,
    LeftToRight,
    RightToLeft,
    DiagTlBr,
    DiagBrTl,
    DiagTrBl,
    DiagBlTr,
    Completed,
}

impl ScanPhase {
    /// The eight sweeping phases in execution order.
    pub const SWEEP_ORDER: [ScanPhase; 8] = [
        ScanPhase::TopDown,
        ScanPhase::BottomUp,
        ScanPhase::LeftToRight,
        ScanPhase::RightToLeft,
        ScanPhase::DiagTlBr,
        ScanPhase::DiagBrTl,
        ScanPhase::DiagTrBl,
        ScanPhase::DiagBlTr,
    ];

    pub fn successor(self) -> ScanPhase {
        match self {
            Self::TopDown => Self::BottomUp,
            Self::BottomUp => Self::LeftToRight,
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::DiagTlBr,
            Self::DiagTlBr => Self::DiagBrTl,
            Self::DiagBrTl => Self::DiagTrBl,
            Self::DiagTrBl => Self::DiagBlTr,
            Self::DiagBlTr | Self::Completed => Self::Completed,
        }
    }

    /// Endpoint slot filled by this phase (0..8), `None` for `Completed`.
    pub fn endpoint_index(self) -> Option<usize> {
        ScanPhase::SWEEP_ORDER.iter().position(|&p| p == self)
    }

    /// Axis this phase contributes to.
    pub fn axis(self) -> Option<DiameterAxis> {
        match self {
            Self::TopDown | Self::BottomUp => Some(DiameterAxis::Vertical),
            Self::LeftToRight | Self::RightToLeft => Some(DiameterAxis::Horizontal),
            Self::DiagTlBr | Self::DiagBrTl => Some(DiameterAxis::Diagonal1),
            Self::DiagTrBl | Self::DiagBlTr => Some(DiameterAxis::Diagonal2),
            Self::Completed => None,
        }
    }

    /// Axis whose second endpoint this phase supplies; completing such a
    /// phase closes the diameter.
    pub fn completes(self) -> Option<DiameterAxis> {
        match self {
            Self::BottomUp => Some(DiameterAxis::Vertical),
            Self::RightToLeft => Some(DiameterAxis::Horizontal),
            Self::DiagBrTl => Some(DiameterAxis::Diagonal1),
            Self::DiagBlTr => Some(DiameterAxis::Diagonal2),
            _ => None,
        }
    }

    /// Map progress in `[0, 1]` onto the sweep line for a `w`×`h` mask.
    /// Returns `None` for `Completed` and for zero-sized dimensions,
    /// which have no sweep lines at all.
    pub fn resolve(self, w: usize, h: usize, progress: f32) -> Option<SweepLine> {
        if w == 0 || h == 0 {
            return None;
        }
        let t = progress.clamp(0.0, 1.0);
        // family-B diagonal index range: -(h-1) ..= (w-1)
        let diff_span = (w - 1 + (h - 1)) as f32;
        let line = match self {
            Self::TopDown => SweepLine::Row {
                y: ((h as f32 * t).floor() as usize).min(h - 1),
                dir: Direction::Forward,
            },
            Self::BottomUp => SweepLine::Row {
                y: ((h as f32 * (1.0 - t)).floor() as usize).min(h - 1),
                dir: Direction::Reverse,
            },
            Self::LeftToRight => SweepLine::Column {
                x: ((w as f32 * t).floor() as usize).min(w - 1),
                dir: Direction::Forward,
            },
            Self::RightToLeft => SweepLine::Column {
                x: ((w as f32 * (1.0 - t)).floor() as usize).min(w - 1),
                dir: Direction::Reverse,
            },
            Self::DiagTlBr => SweepLine::DiagSum {
                k: ((t * (w + h - 2) as f32).floor() as usize).min(w + h - 2),
                dir: Direction::Forward,
            },
            Self::DiagBrTl => SweepLine::DiagSum {
                k: (((1.0 - t) * (w + h - 2) as f32).floor() as usize).min(w + h - 2),
                dir: Direction::Reverse,
            },
            Self::DiagTrBl => SweepLine::DiagDiff {
                k: -(h as isize - 1) + (t * diff_span).floor() as isize,
                dir: Direction::Forward,
            },
            Self::DiagBlTr => SweepLine::DiagDiff {
                k: (w as isize - 1) - (t * diff_span).floor() as isize,
                dir: Direction::Reverse,
            },
            Self::Completed => return None,
        };
        Some(line)
    }
}
