#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod mask;
pub mod scan;
pub mod score;
pub mod sweep;

// Demo-binary plumbing; public for the bins, considered unstable.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: scorer + results.
pub use crate::detector::{CircleScorer, ScorerParams};
pub use crate::error::ScanError;
pub use crate::score::{Diameter, DiameterAxis, ScoreResult};

// Scan-level API for callers driving their own progress source.
pub use crate::scan::{Advance, ScanMachine, ScanPhase, ScanSession};

// High-level diagnostics snapshot.
pub use crate::diagnostics::ScanReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::ImageRgb8;
    pub use crate::mask::Mask;
    pub use crate::{CircleScorer, ScanError, ScorerParams, ScoreResult};
}
