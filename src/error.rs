use crate::scan::ScanPhase;
use std::fmt;

/// Errors surfaced by the scan pipeline.
///
/// All variants are recoverable: the caller may rebuild the mask with a
/// different threshold and retry the whole scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Input image has zero width or height.
    EmptyImage,
    /// Input image is not square; cropping is the caller's job.
    NotSquare { width: usize, height: usize },
    /// A sweep phase ran its progress to 1.0 without ever touching the
    /// shape (blank mask, or the crop excluded the drawing).
    PhaseStall { phase: ScanPhase },
    /// Score requested before all four diameters were measured. A usage
    /// error rather than a runtime condition.
    IncompleteScore { completed: usize },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyImage => write!(f, "image has zero size"),
            Self::NotSquare { width, height } => {
                write!(f, "image is not square: {width}x{height}")
            }
            Self::PhaseStall { phase } => {
                write!(f, "sweep phase {phase:?} stalled: no boundary found at full progress")
            }
            Self::IncompleteScore { completed } => {
                write!(f, "score requested with only {completed} of 4 diameters measured")
            }
        }
    }
}

impl std::error::Error for ScanError {}
