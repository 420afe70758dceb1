//! Progress-driven scan state machine.
//!
//! The machine owns no clock: an external driver (animation tick, demo
//! loop, test harness) feeds `advance` with per-phase progress values in
//! `[0, 1]`. Each call resolves the active phase's sweep line, scans it,
//! and on a hit records the midpoint endpoint and moves to the successor
//! phase. State lives in a [`ScanSession`] snapshot that is replaced
//! wholesale on every transition, so callers can grab a consistent view
//! at any time for overlay rendering.
//!
//! A phase that reaches full progress without ever touching the shape
//! surfaces as [`ScanError::PhaseStall`] instead of waiting forever.
use super::ScanPhase;
use crate::error::ScanError;
use crate::mask::Mask;
use crate::score::Diameter;
use crate::sweep::scan_line;
use log::debug;
use nalgebra::Point2;
use serde::Serialize;

/// Immutable-after-construction snapshot of scan state.
#[derive(Clone, Debug, Serialize)]
pub struct ScanSession {
    pub phase: ScanPhase,
    /// One slot per sweep phase, indexed by `ScanPhase::endpoint_index`.
    pub endpoints: [Option<Point2<f32>>; 8],
    /// One slot per axis, indexed by `DiameterAxis::index`.
    pub diameters: [Option<Diameter>; 4],
    /// Last progress seen by the active phase; cleared on transition.
    pub last_progress: Option<f32>,
}

impl ScanSession {
    fn fresh() -> Self {
        Self {
            phase: ScanPhase::TopDown,
            endpoints: [None; 8],
            diameters: [None; 4],
            last_progress: None,
        }
    }

    /// Number of phases that have recorded their endpoint.
    pub fn completed_phases(&self) -> usize {
        self.endpoints.iter().filter(|e| e.is_some()).count()
    }
}

/// Outcome of a single `advance` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The sweep line missed the shape; call again with higher progress.
    Pending,
    /// The named phase recorded its endpoint and the machine moved on.
    PhaseDone(ScanPhase),
    /// All eight phases are done (also returned by post-completion calls).
    Finished,
}

/// Sequences the eight sweep phases over a mask of fixed dimensions.
pub struct ScanMachine {
    w: usize,
    h: usize,
    session: ScanSession,
}

impl ScanMachine {
    /// Machine for a `w`×`h` mask. Dimensions are expected to be
    /// non-zero; a zero-sized machine has no sweep lines to resolve and
    /// every `advance` is a no-op.
    pub fn new(w: usize, h: usize) -> Self {
        debug_assert!(w > 0 && h > 0);
        Self {
            w,
            h,
            session: ScanSession::fresh(),
        }
    }

    /// Current state snapshot.
    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub fn is_completed(&self) -> bool {
        self.session.phase == ScanPhase::Completed
    }

    /// Drive the active phase with a progress value in `[0, 1]`.
    ///
    /// Re-delivering the same progress within a phase is harmless: a miss
    /// stays a miss, and a hit already moved the machine to the next
    /// phase, so an endpoint is never recorded twice.
    pub fn advance(&mut self, mask: &Mask, progress: f32) -> Result<Advance, ScanError> {
        debug_assert_eq!((mask.w, mask.h), (self.w, self.h));
        let phase = self.session.phase;
        let Some(line) = phase.resolve(self.w, self.h, progress) else {
            return Ok(Advance::Finished);
        };
        let t = progress.clamp(0.0, 1.0);
        if let Some(prev) = self.session.last_progress {
            if t < prev {
                debug!("ScanMachine::advance non-monotonic progress {t:.3} < {prev:.3} in {phase:?}");
            }
        }

        match scan_line(mask, line) {
            Some(hit) => {
                let mid = hit.midpoint();
                let mut next = self.session.clone();
                if let Some(slot) = phase.endpoint_index() {
                    next.endpoints[slot] = Some(mid);
                }
                if let Some(axis) = phase.completes() {
                    let i = axis.index();
                    if let (Some(p1), Some(p2)) = (next.endpoints[2 * i], next.endpoints[2 * i + 1])
                    {
                        next.diameters[i] = Some(Diameter::new(axis, p1, p2));
                    }
                }
                next.phase = phase.successor();
                next.last_progress = None;
                debug!(
                    "ScanMachine::advance {phase:?} hit at ({:.1}, {:.1}) -> {:?}",
                    mid.x, mid.y, next.phase
                );
                self.session = next;
                if self.session.phase == ScanPhase::Completed {
                    Ok(Advance::Finished)
                } else {
                    Ok(Advance::PhaseDone(phase))
                }
            }
            None if t >= 1.0 => Err(ScanError::PhaseStall { phase }),
            None => {
                self.session.last_progress = Some(t);
                Ok(Advance::Pending)
            }
        }
    }

    /// The four measurements, available once every phase has completed.
    pub fn diameters(&self) -> Result<[Diameter; 4], ScanError> {
        let ds = &self.session.diameters;
        match (ds[0], ds[1], ds[2], ds[3]) {
            (Some(v), Some(h), Some(d1), Some(d2)) => Ok([v, h, d1, d2]),
            _ => Err(ScanError::IncompleteScore {
                completed: ds.iter().filter(|d| d.is_some()).count(),
            }),
        }
    }
}
