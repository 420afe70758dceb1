//! Diameter measurements and the circularity score.
//!
//! The score compares the four measured diameters against their mean:
//! `circle_score = MAX_SCORE - DEVIATION_WEIGHT * average_deviation`.
//! Both constants are policy knobs, not physical derivations; tune them
//! if a different grading curve is wanted. The score is deliberately
//! unclamped, so a very ragged drawing can go negative; clamping for
//! presentation is left to the consumer.
use nalgebra::Point2;
use serde::Serialize;

/// Upper bound of the grading curve for a perfectly even circle.
pub const MAX_SCORE: f32 = 100.0;
/// Penalty per pixel of average diameter deviation.
pub const DEVIATION_WEIGHT: f32 = 0.6;

/// The four measured axes, in measurement order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiameterAxis {
    Vertical,
    Horizontal,
    /// Anti-diagonal family (`x + y` constant).
    Diagonal1,
    /// Main-diagonal family (`x - y` constant).
    Diagonal2,
}

impl DiameterAxis {
    pub const ALL: [DiameterAxis; 4] = [
        DiameterAxis::Vertical,
        DiameterAxis::Horizontal,
        DiameterAxis::Diagonal1,
        DiameterAxis::Diagonal2,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Vertical => 0,
            Self::Horizontal => 1,
            Self::Diagonal1 => 2,
            Self::Diagonal2 => 3,
        }
    }
}

/// A completed diameter: two opposite sweep endpoints and their distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Diameter {
    pub axis: DiameterAxis,
    pub p1: Point2<f32>,
    pub p2: Point2<f32>,
    pub length: f32,
}

impl Diameter {
    /// Measure the Euclidean distance between the two endpoints.
    pub fn new(axis: DiameterAxis, p1: Point2<f32>, p2: Point2<f32>) -> Self {
        let length = (p2 - p1).norm();
        Self {
            axis,
            p1,
            p2,
            length,
        }
    }
}

/// Aggregate circularity result over the four diameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoreResult {
    pub average_diameter: f32,
    /// Absolute deviation from the mean, indexed by `DiameterAxis::index`.
    pub deviations: [f32; 4],
    pub average_deviation: f32,
    pub circle_score: f32,
}

impl ScoreResult {
    pub fn from_diameters(diameters: &[Diameter; 4]) -> Self {
        let average_diameter =
            diameters.iter().map(|d| d.length).sum::<f32>() / diameters.len() as f32;
        let mut deviations = [0.0f32; 4];
        for d in diameters {
            deviations[d.axis.index()] = (average_diameter - d.length).abs();
        }
        let average_deviation = deviations.iter().sum::<f32>() / deviations.len() as f32;
        let circle_score = MAX_SCORE - average_deviation * DEVIATION_WEIGHT;
        Self {
            average_diameter,
            deviations,
            average_deviation,
            circle_score,
        }
    }
}
