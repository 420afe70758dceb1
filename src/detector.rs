//! `CircleScorer` ties the pipeline together for one image session.
//!
//! Construction binarizes the image into a mask and arms a fresh scan
//! machine. The caller then either feeds `advance` from its own progress
//! source (an animation clock in the original setting) or lets
//! `run_to_completion` play a stepped ramp through every phase. A
//! threshold change goes through `rescan`, which rebuilds mask and
//! machine from zeroed state so nothing bleeds across scans.
//!
//! Typical usage:
//! ```no_run
//! use circle_scorer::{CircleScorer, ScorerParams};
//! use circle_scorer::image::ImageRgb8;
//!
//! # fn example(img: ImageRgb8<'_>) {
//! let mut scorer = CircleScorer::new(img, ScorerParams::default()).unwrap();
//! match scorer.run_to_completion() {
//!     Ok(score) => println!("score: {:.1}", score.circle_score),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```
use crate::diagnostics::{PhaseEndpoint, ScanReport};
use crate::error::ScanError;
use crate::image::ImageRgb8;
use crate::mask::Mask;
use crate::scan::{Advance, ScanMachine, ScanPhase, ScanSession};
use crate::score::ScoreResult;
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Knobs for a scoring session.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ScorerParams {
    /// Binarization threshold in `[0, 255]`.
    pub threshold: u8,
    /// Progress steps per phase used by `run_to_completion`.
    pub steps_per_phase: usize,
}

impl Default for ScorerParams {
    fn default() -> Self {
        Self {
            threshold: 128,
            steps_per_phase: 64,
        }
    }
}

/// One scoring session over a borrowed square image.
pub struct CircleScorer<'a> {
    img: ImageRgb8<'a>,
    params: ScorerParams,
    mask: Mask,
    machine: ScanMachine,
    latency_ms: f64,
}

impl<'a> CircleScorer<'a> {
    /// Binarize `img` and arm the scan. The image must be square and
    /// non-empty; cropping happens upstream.
    pub fn new(img: ImageRgb8<'a>, params: ScorerParams) -> Result<Self, ScanError> {
        if img.w == 0 || img.h == 0 {
            return Err(ScanError::EmptyImage);
        }
        if !img.is_square() {
            return Err(ScanError::NotSquare {
                width: img.w,
                height: img.h,
            });
        }
        let mask = Mask::binarize(&img, params.threshold);
        debug!(
            "CircleScorer::new {}x{} threshold={} foreground={}",
            img.w,
            img.h,
            params.threshold,
            mask.foreground_count()
        );
        let machine = ScanMachine::new(img.w, img.h);
        Ok(Self {
            img,
            params,
            mask,
            machine,
            latency_ms: 0.0,
        })
    }

    /// Discard the current mask and scan state, rebinarize at a new
    /// threshold, and start over from `TopDown`.
    pub fn rescan(&mut self, threshold: u8) {
        self.params.threshold = threshold;
        self.mask = Mask::binarize(&self.img, threshold);
        self.machine = ScanMachine::new(self.img.w, self.img.h);
        self.latency_ms = 0.0;
        debug!(
            "CircleScorer::rescan threshold={} foreground={}",
            threshold,
            self.mask.foreground_count()
        );
    }

    /// Feed one progress value to the active phase.
    pub fn advance(&mut self, progress: f32) -> Result<Advance, ScanError> {
        self.machine.advance(&self.mask, progress)
    }

    /// Play an even progress ramp through every remaining phase and
    /// compute the score. The ramp always ends at exactly 1.0, so a phase
    /// that never finds the boundary surfaces as `PhaseStall`.
    pub fn run_to_completion(&mut self) -> Result<ScoreResult, ScanError> {
        let steps = self.params.steps_per_phase.max(1);
        let start = Instant::now();
        while !self.machine.is_completed() {
            let mut moved = false;
            for i in 1..=steps {
                let progress = i as f32 / steps as f32;
                match self.machine.advance(&self.mask, progress)? {
                    Advance::Pending => {}
                    Advance::PhaseDone(_) | Advance::Finished => {
                        moved = true;
                        break;
                    }
                }
            }
            // advance(1.0) either hits or errors, so the ramp cannot end
            // with a silent miss
            debug_assert!(moved || self.machine.is_completed());
        }
        self.latency_ms += start.elapsed().as_secs_f64() * 1000.0;
        self.score()
    }

    /// Score from the measured diameters; fails with `IncompleteScore`
    /// until all eight phases completed.
    pub fn score(&self) -> Result<ScoreResult, ScanError> {
        let diameters = self.machine.diameters()?;
        Ok(ScoreResult::from_diameters(&diameters))
    }

    pub fn session(&self) -> &ScanSession {
        self.machine.session()
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn threshold(&self) -> u8 {
        self.params.threshold
    }

    /// Snapshot for JSON output and overlay rendering.
    pub fn report(&self) -> ScanReport {
        let session = self.machine.session();
        let endpoints = ScanPhase::SWEEP_ORDER
            .iter()
            .zip(session.endpoints.iter())
            .map(|(&phase, point)| PhaseEndpoint {
                phase,
                point: point.map(|p| [p.x, p.y]),
            })
            .collect();
        ScanReport {
            width: self.img.w,
            height: self.img.h,
            threshold: self.params.threshold,
            foreground_pixels: self.mask.foreground_count(),
            completed_phases: session.completed_phases(),
            endpoints,
            diameters: session.diameters.iter().flatten().copied().collect(),
            score: self.score().ok(),
            latency_ms: self.latency_ms,
        }
    }
}
