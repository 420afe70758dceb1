use crate::scan::ScanPhase;
use crate::score::{Diameter, ScoreResult};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct PhaseEndpoint {
    pub phase: ScanPhase,
    /// Sub-pixel midpoint, absent while the phase has not completed.
    pub point: Option<[f32; 2]>,
}

/// Serializable snapshot of a whole scan, for JSON reports and overlays.
#[derive(Clone, Debug, Serialize)]
pub struct ScanReport {
    pub width: usize,
    pub height: usize,
    pub threshold: u8,
    pub foreground_pixels: usize,
    pub completed_phases: usize,
    pub endpoints: Vec<PhaseEndpoint>,
    pub diameters: Vec<Diameter>,
    pub score: Option<ScoreResult>,
    pub latency_ms: f64,
}
